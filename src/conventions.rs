//! Naming and layout conventions for generated procedures

/// The constants that shape a generated procedure.
///
/// Every field has a default matching the house style the generator was
/// written for; callers override individual fields with struct update syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// Sigil prepended to every input parameter name (e.g. `@i`)
    pub parameter_prefix: String,
    /// Appended to the naming token to form the procedure name (e.g. `Add`)
    pub procedure_suffix: String,
    /// Character that starts the naming token inside the table name
    pub naming_marker: char,
    /// Text that ends the naming token inside the table name
    pub naming_terminator: String,
    /// Column width the raw name is padded to in the parameter list
    pub parameter_pad_width: usize,
    /// Column width the raw name is padded to in the update `set` list
    pub assignment_pad_width: usize,
    /// Emit the legacy `declare @xReturn int` line in the upsert body.
    /// Nothing in the generated body reads it.
    pub declare_return_variable: bool,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            parameter_prefix: "@i".to_string(),
            procedure_suffix: "Add".to_string(),
            naming_marker: '$',
            naming_terminator: "])".to_string(),
            parameter_pad_width: 32,
            assignment_pad_width: 16,
            declare_return_variable: false,
        }
    }
}
