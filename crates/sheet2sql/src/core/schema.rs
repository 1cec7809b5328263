//! Schema types for the generated table: logical column types, resolved
//! column specs and the table spec handed to the emitter.
//!
//! These types are the dialect-agnostic middle ground between a tabular
//! source and the SQL script: the plan builds them once per generation
//! request and they are immutable afterwards.

use serde::{Deserialize, Serialize};

/// Dialect-agnostic classification of a column's content.
///
/// Distinct from each SQL dialect's concrete column type; the mapping to
/// native types lives with the dialect strategies in [`crate::emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    /// Free text. The default for anything unrecognized.
    #[default]
    String,
    /// Integer numbers.
    Int,
    /// Floating point numbers.
    Double,
    /// Exact decimal numbers.
    Decimal,
    /// Date + time of day.
    DateTime,
    /// Boolean flag.
    Bool,
}

impl LogicalType {
    /// Parse a logical type tag, case-insensitively.
    ///
    /// Empty or unrecognized tags map to [`LogicalType::String`]; a tag is
    /// never an error.
    pub fn parse_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "int" => LogicalType::Int,
            "double" => LogicalType::Double,
            "decimal" => LogicalType::Decimal,
            "datetime" => LogicalType::DateTime,
            "bool" => LogicalType::Bool,
            _ => LogicalType::String,
        }
    }

    /// Whether values of this type are emitted as bare numeric literals.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            LogicalType::Int | LogicalType::Double | LogicalType::Decimal
        )
    }
}

/// The resolved, emission-ready description of one source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Position of this column in the source table. Row cells are aligned
    /// to this index, not to the filtered enabled-column list.
    pub source_index: usize,

    /// Original header text, kept for round-trip/debugging.
    pub display_caption: String,

    /// Identifier-safe output name, unique within the table.
    pub output_name: String,

    /// Effective logical type driving column DDL and value formatting.
    pub logical_type: LogicalType,

    /// Disabled columns are tracked but omitted from CREATE and INSERT.
    pub enabled: bool,
}

/// The resolved description of the whole table.
///
/// Built once per generation request by [`crate::plan::ColumnPlan`];
/// immutable thereafter. Owns its [`ColumnSpec`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Identifier-safe table name.
    pub name: String,

    /// Columns in original source order, enabled or not.
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    /// Iterate over the columns that take part in CREATE/INSERT emission.
    pub fn enabled_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.enabled)
    }
}

/// Per-column user override, keyed externally by original header text.
///
/// A column with no override entry at all is enabled with inferred name
/// and type; unmatched columns are never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOverride {
    /// Explicit, already-normalized output name. Skips transliteration but
    /// still participates in uniqueness resolution.
    #[serde(default)]
    pub name: Option<String>,

    /// Logical type tag (case-insensitive, `string` semantics when
    /// empty/unrecognized). `None`/empty falls back to type inference.
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,

    /// Whether the column appears in CREATE/INSERT output.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ColumnOverride {
    fn default() -> Self {
        Self {
            name: None,
            type_tag: None,
            enabled: true,
        }
    }
}

impl ColumnOverride {
    /// The effective type tag, if one was supplied and is non-empty.
    pub fn effective_type(&self) -> Option<LogicalType> {
        self.type_tag
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(LogicalType::parse_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_case_insensitive() {
        assert_eq!(LogicalType::parse_tag("INT"), LogicalType::Int);
        assert_eq!(LogicalType::parse_tag("DateTime"), LogicalType::DateTime);
        assert_eq!(LogicalType::parse_tag("bool"), LogicalType::Bool);
        assert_eq!(LogicalType::parse_tag("Decimal"), LogicalType::Decimal);
        assert_eq!(LogicalType::parse_tag(" double "), LogicalType::Double);
    }

    #[test]
    fn test_parse_tag_unrecognized_defaults_to_string() {
        assert_eq!(LogicalType::parse_tag(""), LogicalType::String);
        assert_eq!(LogicalType::parse_tag("varchar"), LogicalType::String);
        assert_eq!(LogicalType::parse_tag("字符串"), LogicalType::String);
    }

    #[test]
    fn test_override_effective_type() {
        let o = ColumnOverride {
            type_tag: Some("Int".to_string()),
            ..Default::default()
        };
        assert_eq!(o.effective_type(), Some(LogicalType::Int));

        let blank = ColumnOverride {
            type_tag: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.effective_type(), None);

        assert_eq!(ColumnOverride::default().effective_type(), None);
        assert!(ColumnOverride::default().enabled);
    }

    #[test]
    fn test_enabled_columns_filter() {
        let table = TableSpec {
            name: "T".to_string(),
            columns: vec![
                ColumnSpec {
                    source_index: 0,
                    display_caption: "a".to_string(),
                    output_name: "A".to_string(),
                    logical_type: LogicalType::String,
                    enabled: true,
                },
                ColumnSpec {
                    source_index: 1,
                    display_caption: "b".to_string(),
                    output_name: "B".to_string(),
                    logical_type: LogicalType::Int,
                    enabled: false,
                },
            ],
        };
        let names: Vec<_> = table.enabled_columns().map(|c| c.output_name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }
}
