//! `devclustr schema` - Print the structural JSON schema

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes the JSON schema to the output path, or stdout when none is
/// given.
///
/// # Errors
///
/// Returns an error when the output cannot be written.
pub fn print_schema(output: Option<&Path>) -> Result<()> {
    let schema = devclustr::schema::cluster_schema().to_json_value();
    let rendered = serde_json::to_string_pretty(&schema).context("failed to render schema")?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write schema file: {}", path.display()))?;
            println!("Wrote schema: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("schema.json");
        print_schema(Some(&out)).unwrap();
        let raw = fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["type"], "object");
    }
}
