//! Table representation handed from the scanner to the procedure builder

use super::FieldDescriptor;

/// Everything the procedure builder needs to know about one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableInfo {
    /// Rightmost bracketed identifier of the CREATE TABLE line (e.g. `[Widget$Customer]`)
    pub table_name: String,
    /// Name of the generated procedure (e.g. `CustomerAdd`)
    pub procedure_name: String,
    /// Columns in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl TableInfo {
    pub fn new(table_name: impl Into<String>, procedure_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            procedure_name: procedure_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Flag the first column whose raw name equals `raw_name` as part of the primary key.
    ///
    /// Returns false when no column matches. Later columns sharing the name are left alone.
    pub fn mark_primary_key(&mut self, raw_name: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.raw_name == raw_name) {
            Some(field) => {
                field.is_primary_key = true;
                true
            }
            None => false,
        }
    }

    pub fn has_primary_key(&self) -> bool {
        self.fields.iter().any(|f| f.is_primary_key)
    }

    pub fn primary_key_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_primary_key)
    }

    /// Columns that may be named in an INSERT or UPDATE (everything but identity columns)
    pub fn insertable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_identity)
    }
}
