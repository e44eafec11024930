//! `devclustr validate` - Validate a cluster specification

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Validates a specification file and reports the outcome.
///
/// # Errors
///
/// Returns an error when the file cannot be read or fails validation.
pub fn validate_file(file: &Path) -> Result<()> {
    let data = fs::read(file)
        .with_context(|| format!("failed to read specification file: {}", file.display()))?;

    let cluster = devclustr::parse(&data)
        .with_context(|| format!("invalid specification: {}", file.display()))?;

    tracing::info!(cluster = %cluster, "specification is valid");
    println!("{cluster}: OK");
    Ok(())
}
