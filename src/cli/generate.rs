//! `devclustr generate` - Compile a specification to Terraform HCL

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Compiles a specification file and writes the HCL document to the
/// output path, or stdout when none is given. Parent directories of the
/// output path are created as needed.
///
/// # Errors
///
/// Returns an error when the file cannot be read, fails validation or
/// generation, or the output cannot be written.
pub fn generate_file(file: &Path, output: Option<&Path>) -> Result<()> {
    let data = fs::read(file)
        .with_context(|| format!("failed to read specification file: {}", file.display()))?;

    let document = devclustr::compile(&data)
        .with_context(|| format!("failed to compile specification: {}", file.display()))?;
    let hcl = document.to_hcl();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, hcl)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            tracing::info!(output = %path.display(), "generated Terraform HCL");
            println!("Generated Terraform HCL: {}", path.display());
        }
        None => print!("{hcl}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "name": "c",
        "infrastructure": [
            {"id": "i1", "kind": "vm", "provider": "aws", "region": "us-west-2"}
        ],
        "nodes": [
            {
                "id": "n1",
                "infrastructure_id": "i1",
                "properties": {"instance_type": "t3.micro"},
                "remote_access": {"public_ssh_key": "~/.ssh/id_rsa.pub"}
            }
        ],
        "devcontainers": [
            {"id": "d1", "node_id": "n1", "source": {"url": "https://github.com/example/repo"}}
        ]
    }"#;

    #[test]
    fn test_generate_writes_output_file() {
        let mut spec_file = tempfile::NamedTempFile::new().unwrap();
        spec_file.write_all(MINIMAL.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("main.tf");

        generate_file(spec_file.path(), Some(&out)).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("provider \"aws\""));
        assert!(written.contains("module \"n1\""));
        assert!(written.contains("output \"n1_output\""));
    }

    #[test]
    fn test_generate_invalid_specification_fails() {
        let mut spec_file = tempfile::NamedTempFile::new().unwrap();
        spec_file.write_all(b"{\"name\": \"c\"}").unwrap();
        assert!(generate_file(spec_file.path(), None).is_err());
    }
}
