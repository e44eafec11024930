//! Cluster domain types and validation
//!
//! The typed representation of a cluster specification together with the
//! semantic validator and the defaulting pass that run after structural
//! validation.

pub mod cluster_def;
pub mod defaults;
pub mod devcontainer;
pub mod errors;
pub mod infrastructure;
pub mod node;
pub mod semantic;
pub mod trimmed;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use cluster_def::Cluster;
pub use defaults::apply_defaults;
pub use devcontainer::{
    Devcontainer, OpenVscodeServer, RemoteAccess, Source, SourceSshKey, Ssh, SshKeySource,
};
pub use errors::{ClusterError, Error, GenerationError, SemanticError, StructuralError};
pub use infrastructure::{Infrastructure, InfrastructureKind, Provider};
pub use node::{Node, NodeDns, NodeProperties, NodeRemoteAccess};
pub use semantic::validate;
pub use trimmed::TrimmedString;
