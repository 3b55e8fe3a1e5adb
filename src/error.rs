//! Error types for rust-sprocgen

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a procedure from a table script
#[derive(Error, Debug)]
pub enum SprocGenError {
    #[error("Table script not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read table script: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Table script contains invalid characters: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("No CREATE TABLE statement found in script")]
    NoCreateTableFound,

    #[error("No column declarations found for table {table}")]
    NoFieldsParsed { table: String },
}
