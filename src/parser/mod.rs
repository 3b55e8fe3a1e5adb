//! CREATE TABLE script scanning

mod ddl_scanner;
mod identifier_utils;
mod script_reader;

pub use ddl_scanner::{scan_table, DdlScanner, ScanState};
pub use identifier_utils::variable_name;
pub use script_reader::{decode_script, read_table_script};
