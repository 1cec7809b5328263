//! MySQL/MariaDB dialect.

use super::SqlDialect;
use crate::core::schema::LogicalType;

/// MySQL/MariaDB dialect implementation.
///
/// Backticks for identifiers; CREATE TABLE pins the InnoDB engine and the
/// utf8mb4 charset.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl SqlDialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_ident(&self, name: &str) -> String {
        format!("`{}`", name)
    }

    fn db_type(&self, ty: LogicalType) -> &'static str {
        match ty {
            LogicalType::Int => "INT",
            LogicalType::Double | LogicalType::Decimal => "DECIMAL(18, 2)",
            LogicalType::DateTime => "DATETIME",
            LogicalType::Bool => "TINYINT(1)",
            LogicalType::String => "TEXT",
        }
    }

    fn drop_table_sql(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS `{}`;", table)
    }

    fn create_table_suffix(&self) -> &'static str {
        ") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
    }
}
