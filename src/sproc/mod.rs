//! Upsert procedure generation

mod procedure_writer;

pub use procedure_writer::build_procedure;
