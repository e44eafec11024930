//! devclustr - compile devcontainer cluster specifications to Terraform
//!
//! ## Commands
//!
//! - `devclustr validate` - Validate a cluster specification
//! - `devclustr generate` - Compile a specification to Terraform HCL
//! - `devclustr schema` - Print the structural JSON schema
//!
//! ## Quick Start
//!
//! ```bash
//! # Validate a specification
//! devclustr validate cluster.json
//!
//! # Compile it to Terraform HCL
//! devclustr generate cluster.json -o main.tf
//! ```
//!
//! Running plan/apply/destroy against the generated document is the job
//! of the Terraform CLI, not of this tool.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    devclustr::logging::init_logging("warn");

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
