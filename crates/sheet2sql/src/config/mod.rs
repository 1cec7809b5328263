//! Generation configuration loading and validation.
//!
//! An overrides file is a small YAML document keyed by original header
//! text (output names are derived later, so the pre-normalization text is
//! the only stable key):
//!
//! ```yaml
//! table: Employees
//! pinyin_mode: initials
//! columns:
//!   员工姓名:
//!     name: EmployeeName
//!     type: string
//!   工资:
//!     type: decimal
//!   内部备注:
//!     enabled: false
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::schema::{ColumnOverride, LogicalType};
use crate::error::{Result, SqlGenError};
use crate::pinyin::PinyinMode;

/// Per-generation settings plus the per-column override map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverridesConfig {
    /// Optional table name; the caller's explicit name wins over this.
    #[serde(default)]
    pub table: Option<String>,

    /// Optional transliteration mode for this batch.
    #[serde(default)]
    pub pinyin_mode: Option<PinyinMode>,

    /// Column overrides keyed by original header text.
    #[serde(default)]
    pub columns: BTreeMap<String, ColumnOverride>,
}

impl OverridesConfig {
    /// Load and validate an overrides file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate an overrides document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: OverridesConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Explicit name overrides must already be identifier-safe; unrecognized
    /// type tags are accepted (string semantics) but logged.
    pub fn validate(&self) -> Result<()> {
        for (header, over) in &self.columns {
            if let Some(name) = &over.name {
                validate_identifier_override(header, name)?;
            }
            if let Some(tag) = over.type_tag.as_deref() {
                let trimmed = tag.trim();
                if !trimmed.is_empty()
                    && LogicalType::parse_tag(trimmed) == LogicalType::String
                    && !trimmed.eq_ignore_ascii_case("string")
                {
                    warn!(column = %header, tag = trimmed, "unrecognized type tag, using string");
                }
            }
        }
        Ok(())
    }
}

/// Check that an explicit name override is identifier-safe.
fn validate_identifier_override(header: &str, name: &str) -> Result<()> {
    let valid = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.contains("__")
        && !name.ends_with('_');
    if valid {
        Ok(())
    } else {
        Err(SqlGenError::Config(format!(
            "Name override for column {:?} is not identifier-safe: {:?}",
            header, name
        )))
    }
}
