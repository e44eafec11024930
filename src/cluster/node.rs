//! Compute node declarations

use crate::cluster::trimmed::TrimmedString;
use serde::{Deserialize, Serialize};

/// Technical configuration of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeProperties {
    /// Machine type or class used to provision this node, specific to
    /// the target infrastructure.
    pub instance_type: TrimmedString,
}

/// Access configuration of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRemoteAccess {
    /// Path to the local public SSH key.
    pub public_ssh_key: TrimmedString,
}

/// DNS configuration of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDns {
    /// Top-level domain or subdomain used to expose public
    /// devcontainers on this node.
    pub high_level_domain: TrimmedString,
}

/// A compute host provisioned on one infrastructure backend, hosting
/// one or more devcontainers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier of this node within the cluster.
    pub id: TrimmedString,

    /// Reference to an entry in the cluster's `infrastructure` list.
    pub infrastructure_id: TrimmedString,

    /// Technical configuration.
    pub properties: NodeProperties,

    /// Access configuration.
    pub remote_access: NodeRemoteAccess,

    /// Optional DNS configuration. When present, devcontainers on this
    /// node must not pin an OpenVSCode Server port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<NodeDns>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_dns() {
        let node: Node = serde_json::from_str(
            r#"{
                "id": "n1",
                "infrastructure_id": "i1",
                "properties": {"instance_type": "t3.micro"},
                "remote_access": {"public_ssh_key": "~/.ssh/id_rsa.pub"}
            }"#,
        )
        .unwrap();
        assert_eq!(node.id, "n1");
        assert!(node.dns.is_none());
    }

    #[test]
    fn test_deserialize_with_dns() {
        let node: Node = serde_json::from_str(
            r#"{
                "id": "n1",
                "infrastructure_id": "i1",
                "properties": {"instance_type": "t3.micro"},
                "remote_access": {"public_ssh_key": "~/.ssh/id_rsa.pub"},
                "dns": {"high_level_domain": " example.com "}
            }"#,
        )
        .unwrap();
        assert_eq!(node.dns.unwrap().high_level_domain, "example.com");
    }
}
