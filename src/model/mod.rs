//! Scanned table model

mod elements;
mod table_info;

pub use elements::FieldDescriptor;
pub use table_info::TableInfo;
