//! Column element types

/// One column declaration scanned from a CREATE TABLE script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name exactly as declared, brackets included (e.g. `[customer-id]`)
    pub raw_name: String,
    /// Procedure parameter name (e.g. `@icustomerid`)
    pub variable_name: String,
    /// Declared type with `]` stripped (e.g. `varchar(50)`)
    pub datatype: String,
    /// Listed in the primary key constraint
    pub is_primary_key: bool,
    /// Declared with `IDENTITY(seed, increment)`
    pub is_identity: bool,
}

impl FieldDescriptor {
    /// Column name without its surrounding brackets
    pub fn bare_name(&self) -> &str {
        self.raw_name
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&self.raw_name)
    }
}
