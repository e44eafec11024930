//! Typed deployment outputs
//!
//! The provisioning engine reports one JSON output value per node (the
//! generated `<node>_output` blocks). Collaborators decode that value
//! once into these structures instead of traversing untyped maps. This
//! crate only carries the identifiers embedded in the outputs, e.g. the
//! token parameter name; it never contacts the parameter store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to decode a deployment output value.
#[derive(Error, Debug)]
#[error("failed to decode deployment output: {0}")]
pub struct OutputDecodeError(#[from] serde_json::Error);

/// OpenVSCode Server access details for one deployed devcontainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenVscodeServerOutput {
    /// URL template with a `{token}` placeholder.
    pub url: String,

    /// Name of the SSM parameter holding the access token.
    pub token_ssm_parameter: String,
}

/// SSH access details for one deployed devcontainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshOutput {
    /// Ready-to-run SSH command.
    pub command: String,
}

/// Remote access section of a deployed devcontainer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAccessOutput {
    /// Web IDE access, when the transport was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openvscode_server: Option<OpenVscodeServerOutput>,

    /// SSH access, when the transport was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshOutput>,
}

/// One deployed devcontainer as reported by the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevcontainerOutput {
    /// Devcontainer id from the cluster specification.
    pub id: String,

    /// Access details.
    #[serde(default)]
    pub remote_access: RemoteAccessOutput,
}

/// Module section of a node output value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOutput {
    /// Deployed devcontainers on this node.
    #[serde(default)]
    pub devcontainers: Vec<DevcontainerOutput>,
}

/// The decoded value of one generated `<node>_output` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOutput {
    /// The node's module output.
    pub module: ModuleOutput,
}

impl NodeOutput {
    /// Decodes one output value from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`OutputDecodeError`] when the JSON does not match the
    /// expected output shape.
    pub fn from_json(value: &str) -> Result<Self, OutputDecodeError> {
        Ok(serde_json::from_str(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_full_output() {
        let raw = r#"{
            "module": {
                "devcontainers": [
                    {
                        "id": "d1",
                        "remote_access": {
                            "openvscode_server": {
                                "url": "https://host:8443/?tkn={token}",
                                "token_ssm_parameter": "/devclustr/n1/d1/token"
                            },
                            "ssh": {"command": "ssh -p 2222 dev@host"}
                        }
                    }
                ]
            }
        }"#;
        let output = NodeOutput::from_json(raw).unwrap();
        assert_eq!(output.module.devcontainers.len(), 1);
        let dc = &output.module.devcontainers[0];
        assert_eq!(dc.id, "d1");
        assert_eq!(
            dc.remote_access
                .openvscode_server
                .as_ref()
                .unwrap()
                .token_ssm_parameter,
            "/devclustr/n1/d1/token"
        );
        assert_eq!(
            dc.remote_access.ssh.as_ref().unwrap().command,
            "ssh -p 2222 dev@host"
        );
    }

    #[test]
    fn test_decode_tolerates_missing_transports() {
        let raw = r#"{"module": {"devcontainers": [{"id": "d1"}]}}"#;
        let output = NodeOutput::from_json(raw).unwrap();
        let dc = &output.module.devcontainers[0];
        assert!(dc.remote_access.openvscode_server.is_none());
        assert!(dc.remote_access.ssh.is_none());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(NodeOutput::from_json(r#"{"module": "oops"}"#).is_err());
        assert!(NodeOutput::from_json("not json").is_err());
    }
}
