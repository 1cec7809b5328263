//! SQL script emission.
//!
//! Renders DROP/CREATE/INSERT statements from a [`TableSpec`] and row data.
//! Dialect differences (identifier quoting, column types, literal
//! formatting) live behind the [`SqlDialect`] strategy trait with one
//! implementation per engine; [`Dialect`] is the external selector.

mod mssql;
mod mysql;
mod oracle;

pub use mssql::MssqlDialect;
pub use mysql::MysqlDialect;
pub use oracle::OracleDialect;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::schema::{LogicalType, TableSpec};
use crate::core::value::CellValue;
use crate::error::SqlGenError;

/// Target SQL database flavor. Purely a selector for formatting rules;
/// carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Microsoft SQL Server.
    SqlServer,
    /// MySQL/MariaDB.
    MySql,
    /// Oracle Database.
    Oracle,
}

impl Dialect {
    /// The strategy implementing this dialect's formatting rules.
    pub fn strategy(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::SqlServer => &MssqlDialect,
            Dialect::MySql => &MysqlDialect,
            Dialect::Oracle => &OracleDialect,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl FromStr for Dialect {
    type Err = SqlGenError;

    /// Parse a dialect selector. Unknown selectors fail fast; there is no
    /// silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlserver" | "sql-server" | "mssql" => Ok(Dialect::SqlServer),
            "mysql" => Ok(Dialect::MySql),
            "oracle" => Ok(Dialect::Oracle),
            other => Err(SqlGenError::UnsupportedDialect(other.to_string())),
        }
    }
}

/// SQL syntax strategy for one database engine.
///
/// Implementations are stateless unit structs. Default methods carry the
/// behavior most engines share; each engine overrides what differs.
pub trait SqlDialect: Send + Sync {
    /// Short lowercase engine name, for logs and selectors.
    fn name(&self) -> &'static str;

    /// Quote an already-normalized identifier. No escaping beyond the
    /// dialect's quoting characters is applied.
    fn quote_ident(&self, name: &str) -> String;

    /// Native column type for a logical type.
    fn db_type(&self, ty: LogicalType) -> &'static str;

    /// The statement dropping the table if it exists.
    fn drop_table_sql(&self, table: &str) -> String;

    /// Closing text of the CREATE TABLE statement.
    fn create_table_suffix(&self) -> &'static str {
        ");"
    }

    /// A string literal, with embedded single quotes doubled.
    fn format_string(&self, value: &str) -> String {
        format!("'{}'", escape_sql_string(value))
    }

    /// A datetime literal from already-formatted `yyyy-MM-dd HH:mm:ss` text.
    fn format_datetime(&self, value: &str) -> String {
        format!("'{}'", value)
    }
}

/// Double embedded single quotes.
pub(crate) fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Renders the three statement blocks for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct SqlEmitter {
    dialect: Dialect,
}

impl SqlEmitter {
    /// Create an emitter for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Generate the full script: DROP, blank line, CREATE, blank line, one
    /// INSERT per row. Zero rows yield a valid script with no trailing
    /// garbage.
    pub fn generate(&self, table: &TableSpec, rows: &[Vec<CellValue<'_>>]) -> String {
        debug!(
            dialect = self.dialect.strategy().name(),
            table = %table.name,
            columns = table.columns.len(),
            rows = rows.len(),
            "generating script"
        );

        let mut script = self.drop_table_sql(table);
        script.push_str("\n\n");
        script.push_str(&self.create_table_sql(table));
        let inserts = self.insert_sql(table, rows);
        if !inserts.is_empty() {
            script.push_str("\n\n");
            script.push_str(&inserts);
        }
        script.push('\n');
        script
    }

    /// The table-drop statement.
    pub fn drop_table_sql(&self, table: &TableSpec) -> String {
        self.dialect.strategy().drop_table_sql(&table.name)
    }

    /// The CREATE TABLE statement over the enabled columns, in original
    /// source order.
    pub fn create_table_sql(&self, table: &TableSpec) -> String {
        let strategy = self.dialect.strategy();
        let mut sql = format!("CREATE TABLE {} (\n", strategy.quote_ident(&table.name));
        let defs: Vec<String> = table
            .enabled_columns()
            .map(|c| {
                format!(
                    "    {} {}",
                    strategy.quote_ident(&c.output_name),
                    strategy.db_type(c.logical_type)
                )
            })
            .collect();
        if !defs.is_empty() {
            sql.push_str(&defs.join(",\n"));
            sql.push('\n');
        }
        sql.push_str(strategy.create_table_suffix());
        sql
    }

    /// One INSERT statement per row, newline-separated, empty for no rows.
    ///
    /// Cells are addressed by each column's source position, so rows stay
    /// aligned with the unfiltered source table; disabled columns are
    /// simply skipped. Short rows read as NULL.
    pub fn insert_sql(&self, table: &TableSpec, rows: &[Vec<CellValue<'_>>]) -> String {
        let strategy = self.dialect.strategy();
        let quoted_table = strategy.quote_ident(&table.name);
        let cols: Vec<_> = table.enabled_columns().collect();
        let col_list = cols
            .iter()
            .map(|c| strategy.quote_ident(&c.output_name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut lines = Vec::with_capacity(rows.len());
        for row in rows {
            let values = cols
                .iter()
                .map(|c| match row.get(c.source_index) {
                    Some(cell) => self.format_value(cell, c.logical_type),
                    None => "NULL".to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "INSERT INTO {} ({}) VALUES ({});",
                quoted_table, col_list, values
            ));
        }
        lines.join("\n")
    }

    /// Format one cell according to the column's effective logical type.
    ///
    /// Numeric and datetime text passes through unvalidated; typing unparsed
    /// text as numeric is the caller's risk.
    pub fn format_value(&self, cell: &CellValue<'_>, ty: LogicalType) -> String {
        let strategy = self.dialect.strategy();
        if cell.is_null() {
            return "NULL".to_string();
        }
        match ty {
            LogicalType::Int | LogicalType::Double | LogicalType::Decimal => {
                cell_text(cell).into_owned()
            }
            LogicalType::Bool => {
                if cell_is_truthy(cell) {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
            LogicalType::DateTime => strategy.format_datetime(&cell_text(cell)),
            LogicalType::String => strategy.format_string(&cell_text(cell)),
        }
    }
}

/// The cell's literal text, formatting typed values the way the script
/// expects (`yyyy-MM-dd HH:mm:ss` for datetimes).
fn cell_text<'a>(cell: &'a CellValue<'_>) -> std::borrow::Cow<'a, str> {
    use std::borrow::Cow;
    match cell {
        CellValue::Null => Cow::Borrowed(""),
        CellValue::Bool(v) => Cow::Borrowed(if *v { "true" } else { "false" }),
        CellValue::Int(v) => Cow::Owned(v.to_string()),
        CellValue::Float(v) => Cow::Owned(v.to_string()),
        CellValue::Decimal(v) => Cow::Owned(v.to_string()),
        CellValue::DateTime(v) => Cow::Owned(v.format("%Y-%m-%d %H:%M:%S").to_string()),
        CellValue::Text(v) => Cow::Borrowed(v.as_ref()),
    }
}

/// Truthiness for bool-typed columns: `true`/`1` in any casing, nonzero
/// numbers, or a native true.
fn cell_is_truthy(cell: &CellValue<'_>) -> bool {
    match cell {
        CellValue::Bool(v) => *v,
        CellValue::Int(v) => *v != 0,
        CellValue::Float(v) => *v != 0.0,
        CellValue::Decimal(v) => !v.is_zero(),
        CellValue::Text(v) => {
            let t = v.trim();
            t.eq_ignore_ascii_case("true") || t == "1"
        }
        _ => false,
    }
}
