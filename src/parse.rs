//! Validation entry point
//!
//! Straight-line pipeline over a raw document: syntax parse, structural
//! schema check, typed deserialization, semantic validation, defaulting.
//! Each stage only runs when the previous stage reported no error.

use crate::cluster::errors::ClusterError;
use crate::cluster::{apply_defaults, validate, Cluster};
use crate::schema::{check, cluster_schema};

/// Parses and fully validates a cluster specification.
///
/// On success the returned model is normalized (whitespace trimmed),
/// semantically valid, and defaulted; it is ready for code generation.
///
/// # Errors
///
/// Returns [`ClusterError::Syntax`] for ill-formed JSON,
/// [`ClusterError::Structural`] for schema violations and
/// [`ClusterError::Semantic`] for cross-entity invariant violations.
pub fn parse(data: &[u8]) -> Result<Cluster, ClusterError> {
    let raw: serde_json::Value =
        serde_json::from_slice(data).map_err(|e| ClusterError::Syntax(e.to_string()))?;

    check(&raw, cluster_schema())?;

    // After a passing structural check this conversion only fails on
    // schema/model drift; surfaced as a syntax-family error.
    let mut cluster: Cluster =
        serde_json::from_value(raw).map_err(|e| ClusterError::Syntax(e.to_string()))?;

    validate(&cluster)?;
    apply_defaults(&mut cluster);

    tracing::debug!(cluster = %cluster, "validated cluster specification");
    Ok(cluster)
}
