use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use rust_sprocgen::{generate_procedure, Conventions, GenerateOptions};

#[derive(Parser)]
#[command(name = "rust-sprocgen")]
#[command(author, version, about = "Generate an upsert stored procedure from a CREATE TABLE script")]
struct Cli {
    /// Path to the CREATE TABLE script
    #[arg(env = "SPROCGEN_INPUT")]
    input: PathBuf,

    /// Declare the legacy @xReturn variable in the procedure body
    #[arg(long)]
    declare_return_variable: bool,

    /// Enable verbose output (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = GenerateOptions {
        input_path: cli.input,
        conventions: Conventions {
            declare_return_variable: cli.declare_return_variable,
            ..Conventions::default()
        },
        verbose: cli.verbose,
    };

    let sql = generate_procedure(&options)?;
    print!("{}", sql);

    Ok(())
}
