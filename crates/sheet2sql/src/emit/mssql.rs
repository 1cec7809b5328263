//! SQL Server dialect.

use super::{escape_sql_string, SqlDialect};
use crate::core::schema::LogicalType;

/// Microsoft SQL Server dialect implementation.
///
/// Brackets for identifiers, `N`-prefixed national-character string
/// literals, `OBJECT_ID` guard for the drop statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlDialect;

impl SqlDialect for MssqlDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_ident(&self, name: &str) -> String {
        format!("[{}]", name)
    }

    fn db_type(&self, ty: LogicalType) -> &'static str {
        match ty {
            LogicalType::Int => "INT",
            LogicalType::Double | LogicalType::Decimal => "DECIMAL(18, 2)",
            LogicalType::DateTime => "DATETIME",
            LogicalType::Bool => "BIT",
            LogicalType::String => "NVARCHAR(MAX)",
        }
    }

    fn drop_table_sql(&self, table: &str) -> String {
        format!(
            "IF OBJECT_ID('{0}', 'U') IS NOT NULL DROP TABLE [{0}];",
            table
        )
    }

    fn format_string(&self, value: &str) -> String {
        format!("N'{}'", escape_sql_string(value))
    }
}
