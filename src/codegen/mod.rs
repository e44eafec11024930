//! Lowering of a validated cluster model to a provisioning document
//!
//! Emits one provider block per infrastructure backend, one module block
//! per node (with nested per-devcontainer entries) and one sensitive
//! output block per node. Blocks are emitted in the same relative order
//! as their source entities, so output is diffable and reproducible.

pub mod document;
mod modules;
mod outputs;
mod providers;

pub use document::{Block, Document, Value};

use crate::cluster::errors::GenerationError;
use crate::cluster::Cluster;

/// Source identifier of the Terraform module every node block points at.
pub const MODULE_SOURCE: &str = "github.com/devclustr/terraform-devcontainers";

/// Generates the provisioning document for a validated, defaulted model.
///
/// # Errors
///
/// Returns [`GenerationError`] when the model cannot be lowered, e.g. a
/// provider value without codegen support.
pub fn generate(cluster: &Cluster) -> Result<Document, GenerationError> {
    let mut doc = Document::new();
    providers::append(&mut doc, &cluster.infrastructure)?;
    modules::append(&mut doc, cluster)?;
    outputs::append(&mut doc, &cluster.nodes);
    tracing::debug!(blocks = doc.blocks().len(), "generated provisioning document");
    Ok(doc)
}
