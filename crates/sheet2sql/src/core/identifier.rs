//! Centralized identifier cleanup and uniqueness resolution.
//!
//! Transliteration produces a raw candidate name; [`to_identifier`] turns it
//! into a SQL-identifier-safe form and [`NameAllocator`] keeps names unique
//! within one table. Dialect-specific quoting happens later, in the emitter.

/// Fallback identifier when cleanup leaves nothing usable.
const EMPTY_IDENTIFIER: &str = "Column1";

/// Normalize a raw candidate into an identifier-safe name.
///
/// Rules, in order:
/// 1. Prefix `C_` when the name does not start with a letter.
/// 2. Replace every character outside `[A-Za-z0-9_]` with `_`.
/// 3. Collapse runs of 2+ underscores into one.
/// 4. Trim leading/trailing underscores.
/// 5. Fall back to `"Column1"` when the result is empty or only the
///    synthetic `C_` prefix survived cleanup.
///
/// The result always starts with a letter and contains only
/// `[A-Za-z0-9_]`.
pub fn to_identifier(raw: &str) -> String {
    let mut name = raw.to_string();

    let prefixed = !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if prefixed {
        name = format!("C_{}", name);
    }

    let mut cleaned = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        };
        if c == '_' {
            if !prev_underscore {
                cleaned.push('_');
            }
            prev_underscore = true;
        } else {
            cleaned.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() || (prefixed && trimmed == "C") {
        EMPTY_IDENTIFIER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Assigns unique names within one table, left-to-right.
///
/// The first occurrence keeps the unsuffixed name; later collisions get an
/// increasing integer suffix (1, 2, 3, ...). Counters are local to one
/// allocator, so every plan build restarts from a clean slate.
#[derive(Debug, Default)]
pub struct NameAllocator {
    assigned: Vec<String>,
}

impl NameAllocator {
    /// Create an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve and return a unique variant of `base`.
    pub fn assign(&mut self, base: &str) -> String {
        let mut unique = base.to_string();
        let mut counter = 1;
        while self.contains(&unique) {
            unique = format!("{}{}", base, counter);
            counter += 1;
        }
        self.assigned.push(unique.clone());
        unique
    }

    fn contains(&self, name: &str) -> bool {
        self.assigned.iter().any(|n| n == name)
    }
}
