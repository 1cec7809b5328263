//! # sheet2sql
//!
//! Converts tabular data (spreadsheet or delimited-text sources) into
//! database-ready SQL scripts: a table-drop statement, a dialect-specific
//! CREATE TABLE statement, and one INSERT statement per row, for:
//!
//! - **SQL Server**
//! - **MySQL/MariaDB**
//! - **Oracle**
//!
//! Column headers (commonly Chinese) are transliterated into unique,
//! identifier-safe names via a phrase dictionary and pinyin romanization;
//! per-column overrides control output name, logical type and inclusion.
//!
//! ## Example
//!
//! ```rust
//! use sheet2sql::{generate_script, Dialect, PlanOptions, TableData};
//!
//! let mut data = TableData::new(vec!["姓名".into(), "年龄".into()]);
//! data.push_row(vec!["张三".to_string().into(), "30".to_string().into()]);
//!
//! let script = generate_script(
//!     Dialect::MySql,
//!     "Employees",
//!     &data,
//!     &Default::default(),
//!     PlanOptions::default(),
//! );
//! assert!(script.contains("CREATE TABLE `Employees`"));
//! ```

pub mod config;
pub mod core;
pub mod emit;
pub mod error;
pub mod pinyin;
pub mod plan;
pub mod source;

// Re-exports for convenient access
pub use config::OverridesConfig;
pub use core::{CellValue, ColumnOverride, ColumnSpec, LogicalType, TableSpec};
pub use emit::{Dialect, SqlEmitter};
pub use error::{Result, SqlGenError};
pub use pinyin::PinyinMode;
pub use plan::{ColumnPlan, PlanOptions};
pub use source::{DelimitedReader, TableData};

use std::collections::BTreeMap;

/// Resolve the column plan and render the full SQL script in one call.
///
/// Equivalent to [`ColumnPlan::build`] followed by [`SqlEmitter::generate`];
/// rows are borrowed from `data` for the duration of the call.
pub fn generate_script(
    dialect: Dialect,
    table_name: &str,
    data: &TableData,
    overrides: &BTreeMap<String, ColumnOverride>,
    options: PlanOptions,
) -> String {
    let table = ColumnPlan::new(options).build(
        table_name,
        &data.headers,
        &data.type_hints,
        overrides,
    );
    SqlEmitter::new(dialect).generate(&table, &data.rows)
}
