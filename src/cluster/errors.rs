//! Error types for the cluster domain
//!
//! The pipeline is all-or-nothing: each stage returns its first error
//! immediately and no stage attempts partial recovery.

use thiserror::Error;

/// Errors produced while validating a cluster specification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// Input bytes are not well-formed JSON.
    #[error("failed to parse cluster file: {0}")]
    Syntax(String),

    /// The document shape violates the structural schema.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// A cross-entity invariant is violated.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Structural schema violations, each carrying a path to the offending
/// node (e.g. `infrastructure[0].region`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A required field is absent.
    #[error("{path}: required field is missing")]
    MissingField {
        /// Path to the missing field.
        path: String,
    },

    /// A field is not declared by the schema.
    #[error("{path}: unknown field")]
    UnknownField {
        /// Path to the unexpected field.
        path: String,
    },

    /// A value has the wrong JSON type.
    #[error("{path}: expected {expected}, found {found}")]
    WrongType {
        /// Path to the offending value.
        path: String,
        /// Type the schema requires.
        expected: &'static str,
        /// Type actually present.
        found: &'static str,
    },

    /// A string is shorter than the schema allows.
    #[error("{path}: must be at least {min} character(s) long")]
    TooShort {
        /// Path to the offending value.
        path: String,
        /// Minimum allowed length.
        min: usize,
    },

    /// A string does not match the required pattern.
    #[error("{path}: value {value:?} does not match pattern {pattern}")]
    PatternMismatch {
        /// Path to the offending value.
        path: String,
        /// The rejected value.
        value: String,
        /// The required pattern.
        pattern: String,
    },

    /// A value is outside the allowed enumeration.
    #[error("{path}: value {value:?} is not one of {allowed:?}")]
    InvalidEnum {
        /// Path to the offending value.
        path: String,
        /// The rejected value.
        value: String,
        /// Permitted values.
        allowed: Vec<&'static str>,
    },

    /// An integer is outside the allowed range.
    #[error("{path}: value {value} must be between {min} and {max}")]
    OutOfRange {
        /// Path to the offending value.
        path: String,
        /// The rejected value.
        value: i64,
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
    },

    /// An array has fewer items than the schema allows.
    #[error("{path}: must contain at least {min} item(s)")]
    TooFewItems {
        /// Path to the offending array.
        path: String,
        /// Minimum allowed item count.
        min: usize,
    },

    /// An array contains two identical items.
    #[error("{path}: items must be unique (items {first} and {second} are identical)")]
    DuplicateItems {
        /// Path to the offending array.
        path: String,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the duplicate.
        second: usize,
    },
}

/// Cross-entity invariant violations, each naming the offending entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// An infrastructure backend declares no id.
    #[error("infrastructure[{index}]: id is missing")]
    InfrastructureIdMissing {
        /// Position of the backend in declaration order.
        index: usize,
    },

    /// Two infrastructure backends share an id.
    #[error("infrastructure id {id:?} is duplicated")]
    DuplicateInfrastructureId {
        /// The duplicated id.
        id: String,
    },

    /// An infrastructure backend declares no region.
    #[error("infrastructure {id:?}: region is missing")]
    RegionMissing {
        /// Id of the offending backend.
        id: String,
    },

    /// Two backends describe the identical target environment.
    #[error(
        "infrastructure {id:?}: duplicate combination of kind {kind:?}, provider {provider:?}, \
         region {region:?} (also declared by {previous:?})"
    )]
    DuplicateEnvironment {
        /// Id of the offending backend.
        id: String,
        /// Kind shared by both backends.
        kind: String,
        /// Provider shared by both backends.
        provider: String,
        /// Region shared by both backends.
        region: String,
        /// Id of the backend declared first.
        previous: String,
    },

    /// A declared backend is never used by any node.
    #[error("infrastructure {id:?} is not referenced by any node")]
    UnreferencedInfrastructure {
        /// Id of the orphaned backend.
        id: String,
    },

    /// A node declares no id.
    #[error("nodes[{index}]: id is missing")]
    NodeIdMissing {
        /// Position of the node in declaration order.
        index: usize,
    },

    /// Two nodes share an id.
    #[error("node id {id:?} is duplicated")]
    DuplicateNodeId {
        /// The duplicated id.
        id: String,
    },

    /// A node declares no infrastructure reference.
    #[error("node {id:?}: infrastructure_id is missing")]
    InfrastructureRefMissing {
        /// Id of the offending node.
        id: String,
    },

    /// A node references a backend that does not exist.
    #[error("node {id:?} references unknown infrastructure {infrastructure_id:?}")]
    UnknownInfrastructure {
        /// Id of the offending node.
        id: String,
        /// The dangling reference.
        infrastructure_id: String,
    },

    /// A node declares no instance type.
    #[error("node {id:?}: properties.instance_type is missing")]
    InstanceTypeMissing {
        /// Id of the offending node.
        id: String,
    },

    /// A node declares no public SSH key.
    #[error("node {id:?}: remote_access.public_ssh_key is missing")]
    PublicSshKeyMissing {
        /// Id of the offending node.
        id: String,
    },

    /// A node declares a DNS block without a domain.
    #[error("node {id:?}: dns.high_level_domain must be provided when dns settings exist")]
    HighLevelDomainMissing {
        /// Id of the offending node.
        id: String,
    },

    /// A declared node hosts no devcontainer.
    #[error("node {id:?} is not referenced by any devcontainer")]
    UnreferencedNode {
        /// Id of the orphaned node.
        id: String,
    },

    /// A devcontainer declares no id.
    #[error("devcontainers[{index}]: id is missing")]
    DevcontainerIdMissing {
        /// Position of the devcontainer in declaration order.
        index: usize,
    },

    /// Two devcontainers share an id.
    #[error("devcontainer id {id:?} is duplicated")]
    DuplicateDevcontainerId {
        /// The duplicated id.
        id: String,
    },

    /// A devcontainer declares no node reference.
    #[error("devcontainer {id:?}: node_id is missing")]
    NodeRefMissing {
        /// Id of the offending devcontainer.
        id: String,
    },

    /// A devcontainer references a node that does not exist.
    #[error("devcontainer {id:?} references unknown node {node_id:?}")]
    UnknownNode {
        /// Id of the offending devcontainer.
        id: String,
        /// The dangling reference.
        node_id: String,
    },

    /// A devcontainer declares no source URL.
    #[error("devcontainer {id:?}: source.url is required")]
    SourceUrlMissing {
        /// Id of the offending devcontainer.
        id: String,
    },

    /// An SSH-style source URL has no SSH key configured.
    #[error("devcontainer {id:?}: ssh_key must be provided for SSH repository URLs")]
    SshKeyRequired {
        /// Id of the offending devcontainer.
        id: String,
    },

    /// The configured SSH key has an empty reference.
    #[error("devcontainer {id:?}: ssh_key.reference must not be empty")]
    SshKeyReferenceMissing {
        /// Id of the offending devcontainer.
        id: String,
    },

    /// A non-SSH source URL carries an SSH key.
    #[error("devcontainer {id:?}: ssh_key must not be used with non-SSH repository URLs")]
    SshKeyForbidden {
        /// Id of the offending devcontainer.
        id: String,
    },

    /// A fixed OpenVSCode port conflicts with node-level DNS routing.
    #[error(
        "devcontainer {id:?}: openvscode_server.port must be omitted when its node {node_id:?} \
         has dns configured"
    )]
    PortWithDns {
        /// Id of the offending devcontainer.
        id: String,
        /// Node whose DNS block conflicts with the port.
        node_id: String,
    },
}

/// Errors produced while lowering a validated model to HCL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A backend carries a provider the generator cannot lower.
    ///
    /// Validation already rejects unknown providers, so hitting this
    /// indicates schema/codegen drift.
    #[error("infrastructure {id:?}: unsupported provider {provider:?}")]
    UnsupportedProvider {
        /// Id of the offending backend.
        id: String,
        /// The unsupported provider value.
        provider: String,
    },
}

/// Any error the compile façade can return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Validation of the input document failed.
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    /// Lowering of the validated model failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_includes_path() {
        let err = StructuralError::MissingField {
            path: "infrastructure[0].region".to_string(),
        };
        assert!(err.to_string().contains("infrastructure[0].region"));
    }

    #[test]
    fn test_semantic_error_names_entities() {
        let err = SemanticError::UnknownInfrastructure {
            id: "n1".to_string(),
            infrastructure_id: "i2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("n1"));
        assert!(msg.contains("i2"));
    }

    #[test]
    fn test_cluster_error_from_semantic() {
        let err: ClusterError = SemanticError::UnreferencedNode {
            id: "n1".to_string(),
        }
        .into();
        assert!(matches!(err, ClusterError::Semantic(_)));
    }

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::UnsupportedProvider {
            id: "i1".to_string(),
            provider: "gcp".to_string(),
        };
        assert!(err.to_string().contains("gcp"));
        assert!(err.to_string().contains("i1"));
    }
}
