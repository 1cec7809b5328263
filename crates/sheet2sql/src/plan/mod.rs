//! Column plan resolution.
//!
//! Merges source headers, native type hints and user overrides into the
//! immutable [`TableSpec`] the emitter walks. Given identical inputs the
//! plan is always identical: no randomness, and collision counters restart
//! for every build.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::identifier::{to_identifier, NameAllocator};
use crate::core::schema::{ColumnOverride, ColumnSpec, LogicalType, TableSpec};
use crate::pinyin::{self, PinyinMode};

/// Fallback table name when the requested name is blank.
const DEFAULT_TABLE_NAME: &str = "TempTable";

/// Options threaded through one plan build.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    /// Transliteration shape for all names in this build.
    pub mode: PinyinMode,
}

/// Builder for the per-table column plan.
#[derive(Debug, Default)]
pub struct ColumnPlan {
    options: PlanOptions,
}

impl ColumnPlan {
    /// Create a plan builder with the given options.
    pub fn new(options: PlanOptions) -> Self {
        Self { options }
    }

    /// Resolve the table spec for `headers`.
    ///
    /// * `table_name` — raw table name; transliterated and sanitized like a
    ///   column name, blank falls back to `"TempTable"`.
    /// * `headers` — source column headers in order; blank entries get a
    ///   positional `Column{i+1}` default before normalization.
    /// * `type_hints` — the source adapter's native type per column, where
    ///   known; consulted only when no override supplies a type tag.
    /// * `overrides` — per-column settings keyed by original header text.
    ///   Columns without an entry stay enabled with inferred name and type.
    pub fn build(
        &self,
        table_name: &str,
        headers: &[String],
        type_hints: &[Option<LogicalType>],
        overrides: &BTreeMap<String, ColumnOverride>,
    ) -> TableSpec {
        let name = self.resolve_table_name(table_name);
        let mut allocator = NameAllocator::new();
        let mut columns = Vec::with_capacity(headers.len());

        for (index, header) in headers.iter().enumerate() {
            let caption = if header.trim().is_empty() {
                format!("Column{}", index + 1)
            } else {
                header.trim().to_string()
            };

            let over = overrides.get(&caption).or_else(|| overrides.get(header));

            let base = match over.and_then(|o| o.name.as_deref()) {
                Some(explicit) => explicit.to_string(),
                None => to_identifier(&pinyin::convert(&caption, self.options.mode)),
            };
            let output_name = allocator.assign(&base);

            let logical_type = over
                .and_then(|o| o.effective_type())
                .or_else(|| type_hints.get(index).copied().flatten())
                .unwrap_or_default();

            let enabled = over.map(|o| o.enabled).unwrap_or(true);

            debug!(
                column = index,
                caption = %caption,
                name = %output_name,
                ?logical_type,
                enabled,
                "resolved column"
            );

            columns.push(ColumnSpec {
                source_index: index,
                display_caption: caption,
                output_name,
                logical_type,
                enabled,
            });
        }

        TableSpec { name, columns }
    }

    fn resolve_table_name(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return DEFAULT_TABLE_NAME.to_string();
        }
        to_identifier(&pinyin::convert(raw, self.options.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn build(headers_in: &[&str], overrides: &BTreeMap<String, ColumnOverride>) -> TableSpec {
        let plan = ColumnPlan::new(PlanOptions::default());
        let hs = headers(headers_in);
        let hints = vec![None; hs.len()];
        plan.build("Employees", &hs, &hints, overrides)
    }

    #[test]
    fn test_blank_headers_get_positional_defaults() {
        let table = build(&["", ""], &BTreeMap::new());
        assert_eq!(table.columns[0].output_name, "Column1");
        assert_eq!(table.columns[1].output_name, "Column2");
        assert_eq!(table.columns[0].display_caption, "Column1");
    }

    #[test]
    fn test_duplicate_names_are_suffixed_first_keeps_plain() {
        // Both headers normalize to "Name".
        let table = build(&["姓名", "名称"], &BTreeMap::new());
        assert_eq!(table.columns[0].output_name, "Name");
        assert_eq!(table.columns[1].output_name, "Name1");
    }

    #[test]
    fn test_output_names_pairwise_distinct() {
        let table = build(&["姓名", "姓名", "姓名", "Name"], &BTreeMap::new());
        let mut names: Vec<_> = table.columns.iter().map(|c| c.output_name.clone()).collect();
        let len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), len);
    }

    #[test]
    fn test_unmatched_columns_enabled_by_default() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "年龄".to_string(),
            ColumnOverride {
                enabled: false,
                ..Default::default()
            },
        );
        let table = build(&["姓名", "年龄"], &overrides);
        assert!(table.columns[0].enabled);
        assert!(!table.columns[1].enabled);
    }

    #[test]
    fn test_override_type_tag_wins_over_hint() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "Count".to_string(),
            ColumnOverride {
                type_tag: Some("int".to_string()),
                ..Default::default()
            },
        );
        let plan = ColumnPlan::new(PlanOptions::default());
        let hs = headers(&["Count", "Score"]);
        let hints = vec![Some(LogicalType::Double), Some(LogicalType::Double)];
        let table = plan.build("T", &hs, &hints, &overrides);
        assert_eq!(table.columns[0].logical_type, LogicalType::Int);
        // No override entry: adapter hint applies.
        assert_eq!(table.columns[1].logical_type, LogicalType::Double);
    }

    #[test]
    fn test_no_override_no_hint_defaults_to_string() {
        let table = build(&["备注"], &BTreeMap::new());
        assert_eq!(table.columns[0].logical_type, LogicalType::String);
    }

    #[test]
    fn test_explicit_name_override_skips_transliteration() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "姓名".to_string(),
            ColumnOverride {
                name: Some("FullName".to_string()),
                ..Default::default()
            },
        );
        let table = build(&["姓名"], &overrides);
        assert_eq!(table.columns[0].output_name, "FullName");
    }

    #[test]
    fn test_explicit_name_still_unique() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "年龄".to_string(),
            ColumnOverride {
                name: Some("Name".to_string()),
                ..Default::default()
            },
        );
        let table = build(&["姓名", "年龄"], &overrides);
        assert_eq!(table.columns[0].output_name, "Name");
        assert_eq!(table.columns[1].output_name, "Name1");
    }

    #[test]
    fn test_disabled_columns_do_not_shift_other_names() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "姓名".to_string(),
            ColumnOverride {
                enabled: false,
                ..Default::default()
            },
        );
        let with_disabled = build(&["姓名", "名称"], &overrides);
        let without = build(&["姓名", "名称"], &BTreeMap::new());
        // The disabled column still reserves "Name"; the second column's
        // assigned name is unaffected by the enabled flag.
        assert_eq!(with_disabled.columns[1].output_name, "Name1");
        assert_eq!(
            with_disabled.columns[1].output_name,
            without.columns[1].output_name
        );
    }

    #[test]
    fn test_initials_mode_threads_through() {
        let plan = ColumnPlan::new(PlanOptions {
            mode: PinyinMode::Initials,
        });
        let hs = headers(&["凭证"]);
        let table = plan.build("T", &hs, &[None], &BTreeMap::new());
        assert_eq!(table.columns[0].output_name, "PZ");
    }

    #[test]
    fn test_blank_table_name_falls_back() {
        let plan = ColumnPlan::new(PlanOptions::default());
        let table = plan.build("  ", &headers(&["a"]), &[None], &BTreeMap::new());
        assert_eq!(table.name, "TempTable");
    }

    #[test]
    fn test_table_name_transliterated() {
        let plan = ColumnPlan::new(PlanOptions::default());
        let table = plan.build("员工", &headers(&["a"]), &[None], &BTreeMap::new());
        assert_eq!(table.name, "YuanGong");
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build(&["姓名", "姓名", ""], &BTreeMap::new());
        let b = build(&["姓名", "姓名", ""], &BTreeMap::new());
        assert_eq!(a, b);
    }
}
