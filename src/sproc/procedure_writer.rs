//! Procedure text writer.
//!
//! Produces the insert-or-update procedure for a scanned table:
//!
//! ```sql
//! create procedure CustomerAdd(
//!     [customer-id]                   @icustomerid
//!     [Name]                          @iName
//! )
//! as
//! begin
//!     if(exists(select 1 from [Widget$Customer] where [customer-id] = @icustomerid))
//!     begin
//!         update [Widget$Customer] set [Name] = @iName
//!     end
//!     else
//!     begin
//!         insert into [Widget$Customer]([Name]) values(@iName)
//!     end
//! end
//! go
//! ```
//!
//! (Shown condensed; every clause is written on its own tab-indented lines.)
//! Tables without a primary key get the insert branch only.

use crate::conventions::Conventions;
use crate::model::{FieldDescriptor, TableInfo};
use crate::util::padding;

/// Generate the upsert procedure for `table`.
///
/// The output depends only on the table name, procedure name and the order,
/// names and flags of the fields; data types are not emitted.
pub fn build_procedure(table: &TableInfo, conventions: &Conventions) -> String {
    let mut out = ProcedureWriter::default();

    write_header(&mut out, table, conventions);

    if table.has_primary_key() {
        if conventions.declare_return_variable {
            out.line(1, "declare @xReturn int");
            out.blank();
        }
        write_exists_check(&mut out, table);
        write_update(&mut out, table, conventions);
        out.line(1, "end");
        out.line(1, "else");
    }

    write_insert(&mut out, table);

    out.line(0, "end");
    out.line(0, "go");
    out.finish()
}

#[derive(Default)]
struct ProcedureWriter {
    text: String,
}

impl ProcedureWriter {
    fn line(&mut self, indent: usize, content: &str) {
        for _ in 0..indent {
            self.text.push('\t');
        }
        self.text.push_str(content);
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn finish(self) -> String {
        self.text
    }
}

// =============================================================================
// Header
// =============================================================================

fn write_header(out: &mut ProcedureWriter, table: &TableInfo, conventions: &Conventions) {
    out.line(0, &format!("create procedure {}(", table.procedure_name));
    for field in &table.fields {
        out.line(
            1,
            &format!(
                "{}{}{}",
                field.raw_name,
                padding(&field.raw_name, conventions.parameter_pad_width),
                field.variable_name
            ),
        );
    }
    out.line(0, ")");
    out.line(0, "as");
    out.line(0, "begin");
}

// =============================================================================
// Update branch
// =============================================================================

fn write_exists_check(out: &mut ProcedureWriter, table: &TableInfo) {
    out.line(1, "if(exists(");
    out.line(2, "select");
    out.line(3, "1");
    out.line(2, "from");
    out.line(3, &table.table_name);
    out.line(2, "where");
    for (i, field) in table.primary_key_fields().enumerate() {
        let conjunction = if i == 0 { "" } else { "and " };
        out.line(
            3,
            &format!("{}{} = {}", conjunction, field.raw_name, field.variable_name),
        );
    }
    out.line(1, "))");
    out.line(1, "begin");
}

fn write_update(out: &mut ProcedureWriter, table: &TableInfo, conventions: &Conventions) {
    // SQL Server rejects assignments to identity columns
    let assignments: Vec<&FieldDescriptor> = table.insertable_fields().collect();
    if assignments.is_empty() {
        out.line(2, "return");
        return;
    }

    out.line(2, "update");
    out.line(3, &table.table_name);
    out.line(2, "set");
    for (i, field) in assignments.iter().enumerate() {
        let separator = if i + 1 < assignments.len() { "," } else { "" };
        out.line(
            3,
            &format!(
                "{}{} = {}{}",
                field.raw_name,
                padding(&field.raw_name, conventions.assignment_pad_width),
                field.variable_name,
                separator
            ),
        );
    }
}

// =============================================================================
// Insert branch
// =============================================================================

fn write_insert(out: &mut ProcedureWriter, table: &TableInfo) {
    out.line(1, "begin");
    if table.insertable_fields().next().is_none() {
        out.line(2, &format!("insert into {} default values", table.table_name));
        out.line(1, "end");
        return;
    }
    out.line(2, &format!("insert into {}(", table.table_name));
    write_insert_list(out, &table.fields, |f| f.raw_name.as_str());
    out.line(2, ")");
    out.line(2, "values(");
    write_insert_list(out, &table.fields, |f| f.variable_name.as_str());
    out.line(2, ")");
    out.line(1, "end");
}

/// Writes one entry per non-identity field. A field is followed by a comma
/// when the next field in declaration order exists and is not an identity.
fn write_insert_list<F>(out: &mut ProcedureWriter, fields: &[FieldDescriptor], entry: F)
where
    F: Fn(&FieldDescriptor) -> &str,
{
    for (i, field) in fields.iter().enumerate() {
        if field.is_identity {
            continue;
        }
        let separator = match fields.get(i + 1) {
            Some(next) if !next.is_identity => ",",
            _ => "",
        };
        out.line(3, &format!("{}{}", entry(field), separator));
    }
}
