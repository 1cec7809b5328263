//! Column-label transliteration.
//!
//! Turns arbitrary header text (commonly Chinese) into Latin identifier
//! candidates in three steps: whole-phrase dictionary lookup, per-character
//! pinyin romanization, and a minimal built-in fallback table. The result
//! still goes through [`crate::core::to_identifier`] before use.
//!
//! Conversion is pure: the mode is an explicit parameter, not process-wide
//! state, so concurrent callers with different settings cannot interfere.

mod dict;

use std::fmt;
use std::str::FromStr;

use pinyin::ToPinyin;
use serde::{Deserialize, Serialize};

use crate::error::SqlGenError;

/// Literal returned when nothing transliterable remains.
const EMPTY_RESULT: &str = "Col";

/// Output shape of the romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinyinMode {
    /// Concatenated capitalized syllables, e.g. `PingZhengRiQi`.
    #[default]
    Full,
    /// First letter per syllable, all uppercase, e.g. `PZRQ`.
    Initials,
}

impl fmt::Display for PinyinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinyinMode::Full => write!(f, "full"),
            PinyinMode::Initials => write!(f, "initials"),
        }
    }
}

impl FromStr for PinyinMode {
    type Err = SqlGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(PinyinMode::Full),
            "initials" => Ok(PinyinMode::Initials),
            other => Err(SqlGenError::Config(format!(
                "Unknown pinyin mode: {} (expected 'full' or 'initials')",
                other
            ))),
        }
    }
}

/// Convert header text into a Latin identifier candidate.
///
/// Lookup order:
/// 1. Phrase dictionary containment match (longest phrase wins, then
///    first-defined). The matched phrase maps to its canonical English
///    fragment; the remainder is romanized and the fragment appended after.
/// 2. Per-character pinyin romanization.
/// 3. Built-in fallback table.
///
/// Returns `"Col"` when nothing usable remains. Empty input is the caller's
/// concern (positional defaults are applied before calling this).
pub fn convert(text: &str, mode: PinyinMode) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return EMPTY_RESULT.to_string();
    }

    if let Some((phrase, mapped)) = find_phrase(trimmed) {
        let remaining = trimmed.replace(phrase, "");
        if remaining.is_empty() {
            return mapped.to_string();
        }
        let converted = convert_phonetic(&remaining, mode);
        if !converted.is_empty() {
            return converted + mapped;
        }
        // The dictionary translation survives even when the remainder is
        // untransliterable; the fallback yields "Col" at worst.
        return convert_fallback(&remaining, mode) + mapped;
    }

    let result = convert_phonetic(trimmed, mode);
    if !result.is_empty() {
        return result;
    }

    convert_fallback(trimmed, mode)
}

/// Find the dictionary phrase contained in `text`.
///
/// Tie-break is deterministic: the longest matching phrase wins, and among
/// equally long matches the one defined first in the table.
fn find_phrase(text: &str) -> Option<(&'static str, &'static str)> {
    let mut best: Option<(&'static str, &'static str)> = None;
    for &(phrase, mapped) in dict::PHRASES {
        if text.contains(phrase) {
            match best {
                Some((current, _)) if phrase.chars().count() <= current.chars().count() => {}
                _ => best = Some((phrase, mapped)),
            }
        }
    }
    best
}

/// Step 2: romanize via the pinyin engine.
///
/// ASCII letters, digits and underscores pass through; any other character
/// without a pinyin reading is stripped. Returns an empty string when
/// nothing survives.
fn convert_phonetic(text: &str, mode: PinyinMode) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if let Some(py) = c.to_pinyin() {
            match mode {
                PinyinMode::Full => push_capitalized(&mut out, py.plain()),
                PinyinMode::Initials => out.push_str(py.first_letter()),
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        }
    }
    shape(out, mode)
}

/// Step 3: romanize via the built-in fallback table.
///
/// Returns `"Col"` when the table yields nothing either.
fn convert_fallback(text: &str, mode: PinyinMode) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if let Some(py) = dict::fallback_syllable(c) {
            match mode {
                PinyinMode::Full => out.push_str(py),
                PinyinMode::Initials => out.push(py.chars().next().unwrap_or('C')),
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        }
    }
    let shaped = shape(out, mode);
    if shaped.is_empty() {
        EMPTY_RESULT.to_string()
    } else {
        shaped
    }
}

/// Apply the mode's casing: Full capitalizes the leading character,
/// Initials uppercases everything.
fn shape(s: String, mode: PinyinMode) -> String {
    if s.is_empty() {
        return s;
    }
    match mode {
        PinyinMode::Initials => s.to_ascii_uppercase(),
        PinyinMode::Full => {
            let mut chars = s.chars();
            let first = chars.next().unwrap();
            first.to_ascii_uppercase().to_string() + chars.as_str()
        }
    }
}

/// Append a syllable with its first letter capitalized.
fn push_capitalized(out: &mut String, syllable: &str) {
    let mut chars = syllable.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
}
