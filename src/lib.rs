//! rust-sprocgen: upsert stored procedures from CREATE TABLE scripts
//!
//! This library scans a SQL Server table script (as scripted by SSMS, with
//! bracket-delimited identifiers) and generates an insert-or-update
//! procedure for the table.

pub mod conventions;
pub mod error;
pub mod model;
pub mod parser;
pub mod sproc;
mod util;

use std::path::PathBuf;

use anyhow::Result;

pub use conventions::Conventions;
pub use error::SprocGenError;

/// Options for generating a procedure
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path to the CREATE TABLE script
    pub input_path: PathBuf,
    /// Naming and layout conventions for the generated procedure
    pub conventions: Conventions,
    /// Report progress on stderr
    pub verbose: bool,
}

/// Generate the upsert procedure for the table scripted in `options.input_path`
pub fn generate_procedure(options: &GenerateOptions) -> Result<String> {
    if options.verbose {
        eprintln!("Reading table script: {}", options.input_path.display());
    }

    // Step 1: Load the script
    let script = parser::read_table_script(&options.input_path)?;

    // Step 2: Scan the table declaration
    let mut scanner = parser::DdlScanner::new(&options.conventions);
    let table = scanner.scan(&script)?;

    if options.verbose {
        for warning in scanner.warnings() {
            eprintln!("Warning: {}", warning);
        }
        eprintln!(
            "Scanned table {} with {} columns ({} in primary key)",
            table.table_name,
            table.fields.len(),
            table.primary_key_fields().count()
        );
    }

    // Step 3: Build the procedure text
    let sql = sproc::build_procedure(&table, &options.conventions);

    if options.verbose {
        eprintln!("Generated procedure: {}", table.procedure_name);
    }

    Ok(sql)
}

/// Generate the upsert procedure for a script already in memory
pub fn generate_from_script(script: &str, conventions: &Conventions) -> Result<String> {
    let table = parser::scan_table(script, conventions)?;
    Ok(sproc::build_procedure(&table, conventions))
}
