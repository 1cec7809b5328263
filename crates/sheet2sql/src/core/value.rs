//! Cell value types for source-agnostic row handling.
//!
//! A tabular source (spreadsheet, delimited text, in-memory table) hands the
//! emitter rows of [`CellValue`]s. Text cells use `Cow` so adapters that
//! already own a buffer can lend it out without re-allocating.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::schema::LogicalType;

/// A single cell of a source row.
///
/// # Lifetime
///
/// The `'a` lifetime allows borrowing text from the source's buffers for the
/// duration of one generation call. Use [`CellValue::into_owned`] when the
/// value has to outlive the source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    /// Missing/empty cell; always emitted as SQL `NULL`.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value.
    Int(i64),

    /// Floating point value.
    Float(f64),

    /// Exact decimal value.
    Decimal(Decimal),

    /// Timestamp without timezone.
    DateTime(NaiveDateTime),

    /// Text data, borrowed or owned.
    Text(Cow<'a, str>),
}

impl<'a> CellValue<'a> {
    /// Convert to a fully owned value with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> CellValue<'static> {
        match self {
            CellValue::Null => CellValue::Null,
            CellValue::Bool(v) => CellValue::Bool(v),
            CellValue::Int(v) => CellValue::Int(v),
            CellValue::Float(v) => CellValue::Float(v),
            CellValue::Decimal(v) => CellValue::Decimal(v),
            CellValue::DateTime(v) => CellValue::DateTime(v),
            CellValue::Text(v) => CellValue::Text(Cow::Owned(v.into_owned())),
        }
    }

    /// Check if this cell is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The logical type this cell natively carries, if any.
    ///
    /// Used by the column plan to infer a column type when the caller did not
    /// override it. Text and NULL cells carry no usable hint.
    #[must_use]
    pub fn native_type(&self) -> Option<LogicalType> {
        match self {
            CellValue::Null | CellValue::Text(_) => None,
            CellValue::Bool(_) => Some(LogicalType::Bool),
            CellValue::Int(_) => Some(LogicalType::Int),
            CellValue::Float(_) => Some(LogicalType::Double),
            CellValue::Decimal(_) => Some(LogicalType::Decimal),
            CellValue::DateTime(_) => Some(LogicalType::DateTime),
        }
    }

    /// Create a text value from a borrowed string slice.
    #[must_use]
    pub fn text_borrowed(s: &'a str) -> Self {
        CellValue::Text(Cow::Borrowed(s))
    }

    /// Create a text value from an owned String.
    #[must_use]
    pub fn text_owned(s: String) -> CellValue<'static> {
        CellValue::Text(Cow::Owned(s))
    }
}

impl From<bool> for CellValue<'static> {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue<'static> {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue<'static> {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue<'static> {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<Decimal> for CellValue<'static> {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<NaiveDateTime> for CellValue<'static> {
    fn from(v: NaiveDateTime) -> Self {
        CellValue::DateTime(v)
    }
}

impl From<String> for CellValue<'static> {
    fn from(v: String) -> Self {
        CellValue::Text(Cow::Owned(v))
    }
}

impl<'a> From<&'a str> for CellValue<'a> {
    fn from(v: &'a str) -> Self {
        CellValue::Text(Cow::Borrowed(v))
    }
}
