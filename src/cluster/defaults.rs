//! Defaulting pass
//!
//! Fills omitted optional fields with computed fallbacks after semantic
//! validation has accepted the model. Gaps only: explicitly supplied
//! values are never overwritten, and nothing is re-validated.

use crate::cluster::devcontainer::{OpenVscodeServer, RemoteAccess};
use crate::cluster::Cluster;

/// Applies default values that depend on other fields.
///
/// - A devcontainer without any remote-access transport gets
///   `{ openvscode_server: {} }`.
/// - An SSH block without a public key inherits the owning node's key.
pub fn apply_defaults(cluster: &mut Cluster) {
    let node_keys: std::collections::HashMap<String, _> = cluster
        .nodes
        .iter()
        .map(|n| (n.id.to_string(), n.remote_access.public_ssh_key.clone()))
        .collect();

    for dc in &mut cluster.devcontainers {
        let needs_default = match &dc.remote_access {
            None => true,
            Some(ra) => ra.is_empty(),
        };
        if needs_default {
            dc.remote_access = Some(RemoteAccess {
                openvscode_server: Some(OpenVscodeServer::default()),
                ssh: None,
            });
        }

        if let Some(ssh) = dc.remote_access.as_mut().and_then(|ra| ra.ssh.as_mut()) {
            if ssh.public_ssh_key.is_empty() {
                if let Some(key) = node_keys.get(dc.node_id.as_str()) {
                    ssh.public_ssh_key = key.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::devcontainer::Ssh;
    use crate::cluster::test_fixtures::minimal_cluster;
    use crate::cluster::TrimmedString;

    #[test]
    fn test_absent_remote_access_gets_openvscode_default() {
        let mut cluster = minimal_cluster();
        apply_defaults(&mut cluster);
        let ra = cluster.devcontainers[0].remote_access.as_ref().unwrap();
        assert_eq!(ra.openvscode_server, Some(OpenVscodeServer::default()));
        assert!(ra.ssh.is_none());
    }

    #[test]
    fn test_empty_remote_access_gets_openvscode_default() {
        let mut cluster = minimal_cluster();
        cluster.devcontainers[0].remote_access = Some(RemoteAccess::default());
        apply_defaults(&mut cluster);
        let ra = cluster.devcontainers[0].remote_access.as_ref().unwrap();
        assert!(ra.openvscode_server.is_some());
    }

    #[test]
    fn test_ssh_key_falls_back_to_node_key() {
        let mut cluster = minimal_cluster();
        cluster.nodes[0].remote_access.public_ssh_key = "/k.pub".into();
        cluster.devcontainers[0].remote_access = Some(RemoteAccess {
            openvscode_server: None,
            ssh: Some(Ssh::default()),
        });
        apply_defaults(&mut cluster);
        let ssh = cluster.devcontainers[0]
            .remote_access
            .as_ref()
            .unwrap()
            .ssh
            .as_ref()
            .unwrap();
        assert_eq!(ssh.public_ssh_key, "/k.pub");
    }

    #[test]
    fn test_explicit_ssh_key_is_kept() {
        let mut cluster = minimal_cluster();
        cluster.devcontainers[0].remote_access = Some(RemoteAccess {
            openvscode_server: None,
            ssh: Some(Ssh {
                port: None,
                public_ssh_key: "/override.pub".into(),
            }),
        });
        apply_defaults(&mut cluster);
        let ssh = cluster.devcontainers[0]
            .remote_access
            .as_ref()
            .unwrap()
            .ssh
            .as_ref()
            .unwrap();
        assert_eq!(ssh.public_ssh_key, "/override.pub");
    }

    #[test]
    fn test_explicit_transport_is_kept() {
        let mut cluster = minimal_cluster();
        let explicit = RemoteAccess {
            openvscode_server: Some(OpenVscodeServer { port: Some(9000) }),
            ssh: None,
        };
        cluster.devcontainers[0].remote_access = Some(explicit.clone());
        apply_defaults(&mut cluster);
        assert_eq!(cluster.devcontainers[0].remote_access, Some(explicit));
    }

    #[test]
    fn test_defaulting_is_idempotent() {
        let mut once = minimal_cluster();
        apply_defaults(&mut once);
        let mut twice = once.clone();
        apply_defaults(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_node_key_type() {
        // Fallback copies the node key verbatim, including tilde paths.
        let mut cluster = minimal_cluster();
        cluster.devcontainers[0].remote_access = Some(RemoteAccess {
            openvscode_server: None,
            ssh: Some(Ssh::default()),
        });
        apply_defaults(&mut cluster);
        let ssh = cluster.devcontainers[0]
            .remote_access
            .as_ref()
            .unwrap()
            .ssh
            .clone()
            .unwrap();
        assert_eq!(ssh.public_ssh_key, TrimmedString::new("~/.ssh/id_rsa.pub"));
    }
}
