//! Error types for the SQL generation library.

use thiserror::Error;

/// Main error type for SQL generation operations.
#[derive(Error, Debug)]
pub enum SqlGenError {
    /// Configuration error (invalid YAML, bad override values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested target dialect is not supported.
    #[error("Unsupported database dialect: {0}")]
    UnsupportedDialect(String),

    /// Tabular source could not be read into a table.
    #[error("Source error: {0}")]
    Source(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SqlGenError {
    /// Create a Source error.
    pub fn source(message: impl Into<String>) -> Self {
        SqlGenError::Source(message.into())
    }

    /// Process exit code for this error.
    ///
    /// 1 = configuration, 2 = unsupported dialect, 3 = source data,
    /// 7 = IO.
    pub fn exit_code(&self) -> u8 {
        match self {
            SqlGenError::Config(_) | SqlGenError::Yaml(_) => 1,
            SqlGenError::UnsupportedDialect(_) => 2,
            SqlGenError::Source(_) | SqlGenError::Csv(_) => 3,
            SqlGenError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for SQL generation operations.
pub type Result<T> = std::result::Result<T, SqlGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SqlGenError::Config("x".into()).exit_code(), 1);
        assert_eq!(SqlGenError::UnsupportedDialect("db2".into()).exit_code(), 2);
        assert_eq!(SqlGenError::source("bad row").exit_code(), 3);
        let io = SqlGenError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 7);
    }

    #[test]
    fn test_format_detailed_includes_chain() {
        let io = SqlGenError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let detailed = io.format_detailed();
        assert!(detailed.starts_with("Error: IO error:"));
        assert!(detailed.contains("Caused by:"));
    }
}
