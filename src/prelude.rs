//! Prelude module for common imports

// Re-export all cluster types with full paths
pub use crate::cluster::cluster_def::Cluster;
pub use crate::cluster::devcontainer::{
    Devcontainer, OpenVscodeServer, RemoteAccess, Source, SourceSshKey, Ssh, SshKeySource,
};
pub use crate::cluster::errors::{
    ClusterError, Error, GenerationError, SemanticError, StructuralError,
};
pub use crate::cluster::infrastructure::{Infrastructure, InfrastructureKind, Provider};
pub use crate::cluster::node::{Node, NodeDns, NodeProperties, NodeRemoteAccess};
pub use crate::cluster::trimmed::TrimmedString;
pub use crate::cluster::{apply_defaults, validate};

// Re-export the pipeline entry points
pub use crate::codegen::{generate, Block, Document, Value};
pub use crate::outputs::NodeOutput;
pub use crate::schema::{check, cluster_schema};
pub use crate::{compile, parse};
