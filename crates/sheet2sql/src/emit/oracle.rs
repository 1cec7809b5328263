//! Oracle dialect.

use super::SqlDialect;
use crate::core::schema::LogicalType;

/// Oracle Database dialect implementation.
///
/// Identifiers stay unquoted, datetime literals go through `TO_DATE`, and
/// the drop statement is an anonymous PL/SQL block that swallows the
/// table-does-not-exist error.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl SqlDialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn quote_ident(&self, name: &str) -> String {
        name.to_string()
    }

    fn db_type(&self, ty: LogicalType) -> &'static str {
        match ty {
            LogicalType::Int => "NUMBER(10)",
            LogicalType::Double | LogicalType::Decimal => "NUMBER(18, 2)",
            LogicalType::DateTime => "DATE",
            LogicalType::Bool => "NUMBER(1)",
            LogicalType::String => "NVARCHAR2(2000)",
        }
    }

    fn drop_table_sql(&self, table: &str) -> String {
        format!(
            "BEGIN\n   EXECUTE IMMEDIATE 'DROP TABLE {}';\nEXCEPTION\n   WHEN OTHERS THEN NULL;\nEND;",
            table
        )
    }

    fn format_datetime(&self, value: &str) -> String {
        format!("TO_DATE('{}', 'YYYY-MM-DD HH24:MI:SS')", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{ColumnSpec, TableSpec};
    use crate::core::value::CellValue;
    use crate::emit::{Dialect, SqlEmitter};

    #[test]
    fn test_identifiers_unquoted() {
        assert_eq!(OracleDialect.quote_ident("Name"), "Name");
    }

    #[test]
    fn test_db_type_table() {
        assert_eq!(OracleDialect.db_type(LogicalType::String), "NVARCHAR2(2000)");
        assert_eq!(OracleDialect.db_type(LogicalType::Int), "NUMBER(10)");
        assert_eq!(OracleDialect.db_type(LogicalType::Double), "NUMBER(18, 2)");
        assert_eq!(OracleDialect.db_type(LogicalType::Decimal), "NUMBER(18, 2)");
        assert_eq!(OracleDialect.db_type(LogicalType::DateTime), "DATE");
        assert_eq!(OracleDialect.db_type(LogicalType::Bool), "NUMBER(1)");
    }

    #[test]
    fn test_drop_is_plsql_block_swallowing_errors() {
        let sql = OracleDialect.drop_table_sql("People");
        assert!(sql.starts_with("BEGIN\n"));
        assert!(sql.contains("EXECUTE IMMEDIATE 'DROP TABLE People';"));
        assert!(sql.contains("WHEN OTHERS THEN NULL;"));
        assert!(sql.ends_with("END;"));
    }

    #[test]
    fn test_datetime_wrapped_in_to_date() {
        let emitter = SqlEmitter::new(Dialect::Oracle);
        assert_eq!(
            emitter.format_value(&CellValue::from("2024-01-15 10:30:00"), LogicalType::DateTime),
            "TO_DATE('2024-01-15 10:30:00', 'YYYY-MM-DD HH24:MI:SS')"
        );
    }

    #[test]
    fn test_create_table_unquoted_columns() {
        let table = TableSpec {
            name: "People".to_string(),
            columns: vec![ColumnSpec {
                source_index: 0,
                display_caption: "Name".to_string(),
                output_name: "Name".to_string(),
                logical_type: LogicalType::String,
                enabled: true,
            }],
        };
        let sql = SqlEmitter::new(Dialect::Oracle).create_table_sql(&table);
        assert_eq!(sql, "CREATE TABLE People (\n    Name NVARCHAR2(2000)\n);");
    }

    #[test]
    fn test_string_literal_plain_quoted() {
        let emitter = SqlEmitter::new(Dialect::Oracle);
        assert_eq!(
            emitter.format_value(&CellValue::from("O'Brien"), LogicalType::String),
            "'O''Brien'"
        );
    }
}
