//! CLI tools for devclustr
//!
//! Provides utilities around the validation/generation pipeline:
//! - `validate`: Validate a cluster specification
//! - `generate`: Compile a specification to Terraform HCL
//! - `schema`: Print the structural JSON schema

pub mod generate;
pub mod schema_export;
pub mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for devclustr
#[derive(Parser, Debug)]
#[command(name = "devclustr")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a cluster specification
    Validate {
        /// Specification file to validate
        file: PathBuf,
    },

    /// Compile a cluster specification to Terraform HCL
    Generate {
        /// Specification file to compile
        file: PathBuf,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the structural JSON schema for cluster specifications
    Schema {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parses arguments and runs the selected command.
///
/// # Errors
///
/// Returns any validation, generation or I/O error of the command.
pub fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Validate { file } => validate::validate_file(&file),
        Command::Generate { file, output } => generate::generate_file(&file, output.as_deref()),
        Command::Schema { output } => schema_export::print_schema(output.as_deref()),
    }
}
