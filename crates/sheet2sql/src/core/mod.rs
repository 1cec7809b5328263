//! Core types shared across the generation pipeline: schema metadata,
//! cell values and identifier handling.

pub mod identifier;
pub mod schema;
pub mod value;

pub use identifier::{to_identifier, NameAllocator};
pub use schema::{ColumnOverride, ColumnSpec, LogicalType, TableSpec};
pub use value::CellValue;
