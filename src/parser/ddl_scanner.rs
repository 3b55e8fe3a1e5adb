//! Line-oriented CREATE TABLE scanner
//!
//! Scans an SSMS-style table script one trimmed line at a time:
//!
//! ```sql
//! CREATE TABLE [dbo].[CRONUS$Customer](
//!     [No_] [varchar](20) NOT NULL,
//!     [Name] [varchar](50) NOT NULL,
//!  CONSTRAINT [CRONUS$Customer$0] PRIMARY KEY CLUSTERED
//! (
//!     [No_] ASC
//! ) ON [PRIMARY]
//! ```
//!
//! Column declarations are collected in order while reading the column
//! section. Primary key membership is only known once the constraint clause
//! is reached, so it is back-filled onto the collected columns by name.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::identifier_utils::{
    bracketed_names, declared_type, first_bracketed, last_bracketed, naming_token, unbracket,
    variable_name, without_bracketed,
};
use crate::conventions::Conventions;
use crate::error::SprocGenError;
use crate::model::{FieldDescriptor, TableInfo};
use crate::util::{contains_ci, find_ci};

// Keyword checks run on lines with bracketed names removed. Word boundaries
// keep options such as PAD_INDEX from matching.
static CONSTRAINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bconstraint\b").unwrap());
static INDEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bindex\b").unwrap());
static PRIMARY_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bprimary\s+key\b").unwrap());

/// Where the scanner is within the CREATE TABLE statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Waiting for the CREATE TABLE line
    ScanningForTable,
    /// Collecting `[column] type ...` declarations
    ReadingColumns,
    /// Past the columns; `primary_key` is set while inside a PRIMARY KEY clause
    ReadingConstraints { primary_key: bool },
}

/// Scanner for a single CREATE TABLE statement
pub struct DdlScanner<'a> {
    conventions: &'a Conventions,
    state: ScanState,
    table: TableInfo,
    warnings: Vec<String>,
}

impl<'a> DdlScanner<'a> {
    pub fn new(conventions: &'a Conventions) -> Self {
        Self {
            conventions,
            state: ScanState::ScanningForTable,
            table: TableInfo::default(),
            warnings: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Non-fatal oddities noticed while scanning (e.g. a missing naming token)
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Scan `script` and return the table it declares.
    ///
    /// Text before the first `CREATE TABLE` is ignored, as is everything after
    /// the first `GO` batch separator that follows it.
    pub fn scan(&mut self, script: &str) -> Result<TableInfo> {
        let start = find_ci(script, "create table").ok_or(SprocGenError::NoCreateTableFound)?;

        for line in script[start..].lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if is_batch_separator(line) {
                break;
            }
            self.scan_line(line);
        }

        if self.table.fields.is_empty() {
            return Err(SprocGenError::NoFieldsParsed {
                table: self.table.table_name.clone(),
            }
            .into());
        }

        Ok(std::mem::take(&mut self.table))
    }

    fn scan_line(&mut self, line: &str) {
        match self.state {
            ScanState::ScanningForTable => {
                self.read_table_line(line);
                self.state = ScanState::ReadingColumns;
            }
            ScanState::ReadingColumns => {
                if line.starts_with('[') {
                    self.read_column(line);
                    if !line.ends_with(',') {
                        self.state = ScanState::ReadingConstraints { primary_key: false };
                    }
                } else if CONSTRAINT_RE.is_match(&without_bracketed(line)) {
                    self.open_constraint(line);
                }
            }
            ScanState::ReadingConstraints { primary_key } => {
                // Key columns first: the same line may carry WITH (...) options
                if primary_key {
                    let key_line = line.trim_start_matches('(').trim_start();
                    if key_line.starts_with('[') {
                        self.mark_key_columns(key_line);
                    }
                }

                let keywords = without_bracketed(line);
                if CONSTRAINT_RE.is_match(&keywords) || INDEX_RE.is_match(&keywords) {
                    self.open_constraint(line);
                } else if PRIMARY_KEY_RE.is_match(&keywords) {
                    self.state = ScanState::ReadingConstraints { primary_key: true };
                    self.mark_key_list(line);
                }
            }
        }
    }

    fn read_table_line(&mut self, line: &str) {
        self.table.table_name = last_bracketed(line).unwrap_or_default().to_string();

        let conventions = self.conventions;
        let token = match naming_token(
            line,
            conventions.naming_marker,
            &conventions.naming_terminator,
        ) {
            Some(token) => token,
            None => {
                self.warnings.push(format!(
                    "table name {} has no '{}' naming token; using the table name",
                    self.table.table_name, conventions.naming_marker
                ));
                unbracket(&self.table.table_name)
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect()
            }
        };
        self.table.procedure_name = format!("{}{}", token, conventions.procedure_suffix);
    }

    fn read_column(&mut self, line: &str) {
        let Some(raw_name) = first_bracketed(line) else {
            self.warnings
                .push(format!("skipped unterminated column declaration: {line}"));
            return;
        };

        // raw_name starts at offset 0 since the line starts with '['
        let datatype = declared_type(line, raw_name.len() - 1);

        let declaration = without_bracketed(&line[raw_name.len()..]);

        self.table.add_field(FieldDescriptor {
            raw_name: raw_name.to_string(),
            variable_name: variable_name(raw_name, &self.conventions.parameter_prefix),
            datatype,
            is_primary_key: PRIMARY_KEY_RE.is_match(&declaration),
            is_identity: contains_ci(&declaration, "identity("),
        });
    }

    fn open_constraint(&mut self, line: &str) {
        let primary_key = PRIMARY_KEY_RE.is_match(&without_bracketed(line));
        self.state = ScanState::ReadingConstraints { primary_key };
        if primary_key {
            self.mark_key_list(line);
        }
    }

    /// Back-fill columns listed inline after the clause's opening parenthesis.
    fn mark_key_list(&mut self, line: &str) {
        if let Some(open) = line.find('(') {
            self.mark_key_columns(&line[open + 1..]);
        }
    }

    /// Back-fill every bracketed column named before the closing parenthesis.
    fn mark_key_columns(&mut self, text: &str) {
        let list = text.split(')').next().unwrap_or_default();
        for name in bracketed_names(list) {
            if !self.table.mark_primary_key(name) {
                self.warnings
                    .push(format!("key column {name} does not match any declared column"));
            }
        }
    }
}

fn is_batch_separator(line: &str) -> bool {
    line.eq_ignore_ascii_case("go") || line.eq_ignore_ascii_case("go;")
}

/// Scan a table script with the given conventions, discarding warnings.
pub fn scan_table(script: &str, conventions: &Conventions) -> Result<TableInfo> {
    DdlScanner::new(conventions).scan(script)
}
