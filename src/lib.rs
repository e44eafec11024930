//! # Devclustr - devcontainer clusters as declarative specifications
//!
//! Devclustr validates a declarative cluster specification (infrastructure
//! backends, compute nodes and the devcontainers to deploy on them) and
//! compiles it into a Terraform HCL provisioning document.
//!
//! ## Pipeline
//!
//! Raw bytes flow through a straight line of stages, each running only
//! when the previous one reported no error:
//!
//! 1. structural schema check ([`schema`])
//! 2. typed deserialization with whitespace normalization ([`cluster`])
//! 3. semantic validation of cross-entity invariants
//! 4. defaulting of computed fallbacks
//! 5. lowering to provider/module/output blocks ([`codegen`])
//!
//! ## Quick Start
//!
//! ```no_run
//! let data = std::fs::read("cluster.json").unwrap();
//! let document = devclustr::compile(&data).unwrap();
//! println!("{document}");
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod cluster;
pub mod codegen;
pub mod logging;
pub mod outputs;
pub mod schema;

mod parse;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use cluster::{
    Cluster, ClusterError, Devcontainer, Error, GenerationError, Infrastructure,
    InfrastructureKind, Node, Provider, SemanticError, SshKeySource, StructuralError,
    TrimmedString,
};
pub use codegen::{generate, Document, MODULE_SOURCE};
pub use parse::parse;

/// Compiles a raw specification into a provisioning document.
///
/// Thin façade over [`parse`] and [`generate`].
///
/// # Errors
///
/// Returns [`Error`] with the first validation or generation failure.
pub fn compile(data: &[u8]) -> Result<Document, Error> {
    let cluster = parse(data)?;
    Ok(generate(&cluster)?)
}

/// Version of the devclustr crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
