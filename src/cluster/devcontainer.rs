//! Devcontainer declarations

use crate::cluster::trimmed::TrimmedString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Secret backends that can hold a private SSH key for cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SshKeySource {
    /// AWS Secrets Manager.
    SecretsManager,
    /// AWS SSM Parameter Store.
    SsmParameterStore,
}

impl fmt::Display for SshKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretsManager => write!(f, "secrets_manager"),
            Self::SsmParameterStore => write!(f, "ssm_parameter_store"),
        }
    }
}

/// SSH key configuration for cloning from private repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSshKey {
    /// Reference identifier of the key in the secret backend.
    pub reference: TrimmedString,

    /// Secret backend holding the private key.
    pub source: SshKeySource,
}

/// Source location of a devcontainer definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Git repository URL. SSH URLs (starting with `ssh://` or `git@`)
    /// require an SSH key; other URLs must not carry one.
    pub url: TrimmedString,

    /// Branch to check out. Defaults to the repository's default branch.
    #[serde(default, skip_serializing_if = "TrimmedString::is_empty")]
    pub branch: TrimmedString,

    /// Relative path to the devcontainer definition within the
    /// repository. Defaults to the repository root.
    #[serde(default, skip_serializing_if = "TrimmedString::is_empty")]
    pub devcontainer_path: TrimmedString,

    /// SSH key for private repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<SourceSshKey>,
}

impl Source {
    /// Returns true if the URL is SSH-style (`ssh://...` or `git@...`).
    #[must_use]
    pub fn is_ssh_url(&self) -> bool {
        self.url.starts_with("ssh://") || self.url.starts_with("git@")
    }
}

/// Web-based IDE access via OpenVSCode Server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenVscodeServer {
    /// TCP port exposing the server. Picked automatically when omitted.
    /// Must be omitted when the owning node has DNS configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// SSH access into the devcontainer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ssh {
    /// TCP port for SSH access. Picked automatically when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Path to the local public SSH key. Falls back to the owning
    /// node's key when omitted.
    #[serde(default, skip_serializing_if = "TrimmedString::is_empty")]
    pub public_ssh_key: TrimmedString,
}

/// Remote access configuration of a devcontainer.
///
/// When absent (or present with neither transport), the defaulting pass
/// installs `{ openvscode_server: {} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAccess {
    /// Optional web-based IDE access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openvscode_server: Option<OpenVscodeServer>,

    /// Optional SSH access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<Ssh>,
}

impl RemoteAccess {
    /// Returns true if neither transport is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.openvscode_server.is_none() && self.ssh.is_none()
    }
}

/// A development environment instance deployed onto exactly one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devcontainer {
    /// Unique identifier of this devcontainer within the cluster.
    pub id: TrimmedString,

    /// Reference to an entry in the cluster's `nodes` list.
    pub node_id: TrimmedString,

    /// Source location of the devcontainer definition.
    pub source: Option<Source>,

    /// Remote access configuration. OpenVSCode Server is the implicit
    /// default transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_access: Option<RemoteAccess>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(url: &str) -> Source {
        Source {
            url: url.into(),
            branch: TrimmedString::default(),
            devcontainer_path: TrimmedString::default(),
            ssh_key: None,
        }
    }

    #[test]
    fn test_ssh_url_classification() {
        assert!(source("ssh://git.example.com/repo.git").is_ssh_url());
        assert!(source("git@github.com:example/repo.git").is_ssh_url());
        assert!(!source("https://github.com/example/repo.git").is_ssh_url());
        assert!(!source("http://host/repo.git").is_ssh_url());
    }

    #[test]
    fn test_deserialize_minimal() {
        let dc: Devcontainer = serde_json::from_str(
            r#"{"id": "d1", "node_id": "n1", "source": {"url": "https://github.com/example/repo"}}"#,
        )
        .unwrap();
        assert_eq!(dc.id, "d1");
        assert!(dc.remote_access.is_none());
        assert!(dc.source.unwrap().ssh_key.is_none());
    }

    #[test]
    fn test_deserialize_ssh_key_source() {
        let key: SourceSshKey = serde_json::from_str(
            r#"{"reference": "my-key", "source": "ssm_parameter_store"}"#,
        )
        .unwrap();
        assert_eq!(key.source, SshKeySource::SsmParameterStore);
        assert_eq!(key.source.to_string(), "ssm_parameter_store");
    }

    #[test]
    fn test_remote_access_is_empty() {
        assert!(RemoteAccess::default().is_empty());
        let with_vscode = RemoteAccess {
            openvscode_server: Some(OpenVscodeServer::default()),
            ssh: None,
        };
        assert!(!with_vscode.is_empty());
    }
}
