//! Infrastructure backend declarations

use crate::cluster::trimmed::TrimmedString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported infrastructure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureKind {
    /// Virtual machine.
    Vm,
}

impl fmt::Display for InfrastructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vm => write!(f, "vm"),
        }
    }
}

/// Supported infrastructure providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Amazon Web Services.
    Aws,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aws => write!(f, "aws"),
        }
    }
}

/// A single infrastructure backend where nodes may be deployed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    /// Unique identifier of this backend within the cluster.
    pub id: TrimmedString,

    /// Type of infrastructure. Currently only `vm` is supported.
    pub kind: InfrastructureKind,

    /// Platform name. Currently only `aws` is supported.
    pub provider: Provider,

    /// Geographic location where resources will be deployed
    /// (e.g. `us-west-2`).
    pub region: TrimmedString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(serde_json::to_string(&InfrastructureKind::Vm).unwrap(), r#""vm""#);
        let kind: InfrastructureKind = serde_json::from_str(r#""vm""#).unwrap();
        assert_eq!(kind, InfrastructureKind::Vm);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result: Result<Provider, _> = serde_json::from_str(r#""gcp""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_trims_fields() {
        let infra: Infrastructure = serde_json::from_str(
            r#"{"id": " i1 ", "kind": "vm", "provider": "aws", "region": " us-west-2 "}"#,
        )
        .unwrap();
        assert_eq!(infra.id, "i1");
        assert_eq!(infra.region, "us-west-2");
    }

    #[test]
    fn test_display() {
        assert_eq!(InfrastructureKind::Vm.to_string(), "vm");
        assert_eq!(Provider::Aws.to_string(), "aws");
    }
}
