//! Tabular source adapters.
//!
//! The core only ever sees a [`TableData`]: ordered headers, optional native
//! type hints, and rows of cells aligned with the headers. Spreadsheet
//! parsing is somebody else's job; any caller can fill a `TableData` by
//! hand. The one adapter shipped here is [`DelimitedReader`] for CSV and
//! other delimited text.

use encoding_rs::Encoding;
use tracing::debug;

use crate::core::schema::LogicalType;
use crate::core::value::CellValue;
use crate::error::{Result, SqlGenError};

/// The normalized "rows of named cells" view of a tabular source.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    /// Column header texts, possibly blank.
    pub headers: Vec<String>,

    /// The source's native logical type per column, where it knows one.
    /// Delimited text knows nothing; a spreadsheet adapter may know more.
    pub type_hints: Vec<Option<LogicalType>>,

    /// Data rows, aligned positionally with `headers`.
    pub rows: Vec<Vec<CellValue<'static>>>,
}

impl TableData {
    /// Create an empty table with the given headers and no type hints.
    pub fn new(headers: Vec<String>) -> Self {
        let hints = vec![None; headers.len()];
        Self {
            headers,
            type_hints: hints,
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: Vec<CellValue<'static>>) {
        self.rows.push(row);
    }
}

/// Reader for delimited text (CSV and friends).
///
/// Handles the concerns upstream of the core: delimiter, byte encoding,
/// which row holds the headers, a preview row cutoff, and blank-row
/// skipping. Empty cells become NULL.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    delimiter: u8,
    encoding: &'static Encoding,
    header_row: usize,
    max_rows: Option<usize>,
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: encoding_rs::UTF_8,
            header_row: 0,
            max_rows: None,
        }
    }
}

impl DelimitedReader {
    /// Create a reader with comma delimiter, UTF-8 encoding and the first
    /// row as headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the byte encoding by WHATWG label (`utf-8`, `gbk`, `gb2312`, ...).
    ///
    /// # Errors
    ///
    /// `SqlGenError::Config` for unknown labels.
    pub fn with_encoding(mut self, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| SqlGenError::Config(format!("Unknown encoding: {}", label)))?;
        self.encoding = encoding;
        Ok(self)
    }

    /// Set the 0-based index of the header row. Rows above it are ignored.
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }

    /// Cap the number of data rows read (preview cutoff).
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Read a file into a [`TableData`].
    pub fn read_path<P: AsRef<std::path::Path>>(&self, path: P) -> Result<TableData> {
        let bytes = std::fs::read(path)?;
        self.read_bytes(&bytes)
    }

    /// Decode and parse raw bytes into a [`TableData`].
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<TableData> {
        let (text, _, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            debug!(
                encoding = self.encoding.name(),
                "decode produced replacement characters"
            );
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut table: Option<TableData> = None;
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if index < self.header_row {
                continue;
            }
            if index == self.header_row {
                let headers = record.iter().map(|f| f.to_string()).collect();
                table = Some(TableData::new(headers));
                continue;
            }

            let Some(data) = table.as_mut() else {
                continue;
            };
            if self.max_rows.is_some_and(|max| data.rows.len() >= max) {
                break;
            }
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let row = record
                .iter()
                .map(|f| {
                    if f.is_empty() {
                        CellValue::Null
                    } else {
                        CellValue::text_owned(f.to_string())
                    }
                })
                .collect();
            data.push_row(row);
        }

        table.ok_or_else(|| {
            SqlGenError::source(format!(
                "Header row {} not found in input",
                self.header_row + 1
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_csv() {
        let data = DelimitedReader::new()
            .read_bytes(b"name,age\nAnn,40\nBob,35\n")
            .unwrap();
        assert_eq!(data.headers, vec!["name", "age"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0][0], CellValue::from("Ann".to_string()));
        assert_eq!(data.type_hints, vec![None, None]);
    }

    #[test]
    fn test_empty_cells_become_null() {
        let data = DelimitedReader::new()
            .read_bytes(b"a,b\n1,\n")
            .unwrap();
        assert_eq!(data.rows[0][1], CellValue::Null);
    }

    #[test]
    fn test_blank_rows_skipped() {
        let data = DelimitedReader::new()
            .read_bytes(b"a,b\n1,2\n,\n3,4\n")
            .unwrap();
        assert_eq!(data.rows.len(), 2);
    }

    #[test]
    fn test_header_row_offset() {
        let data = DelimitedReader::new()
            .with_header_row(1)
            .read_bytes(b"junk,junk\na,b\n1,2\n")
            .unwrap();
        assert_eq!(data.headers, vec!["a", "b"]);
        assert_eq!(data.rows.len(), 1);
    }

    #[test]
    fn test_max_rows_cutoff() {
        let data = DelimitedReader::new()
            .with_max_rows(Some(1))
            .read_bytes(b"a\n1\n2\n3\n")
            .unwrap();
        assert_eq!(data.rows.len(), 1);
    }

    #[test]
    fn test_missing_header_row_is_error() {
        let err = DelimitedReader::new()
            .with_header_row(5)
            .read_bytes(b"a,b\n")
            .unwrap_err();
        assert!(matches!(err, SqlGenError::Source(_)));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = DelimitedReader::new()
            .with_delimiter(b';')
            .read_bytes(b"a;b\n1;2\n")
            .unwrap();
        assert_eq!(data.headers, vec!["a", "b"]);
    }

    #[test]
    fn test_gbk_encoded_input() {
        let (bytes, _, _) = encoding_rs::GBK.encode("姓名,年龄\n张三,30\n");
        let data = DelimitedReader::new()
            .with_encoding("gbk")
            .unwrap()
            .read_bytes(&bytes)
            .unwrap();
        assert_eq!(data.headers, vec!["姓名", "年龄"]);
        assert_eq!(data.rows[0][0], CellValue::from("张三".to_string()));
    }

    #[test]
    fn test_read_path_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a,b\n1,2\n").unwrap();
        file.flush().unwrap();
        let data = DelimitedReader::new().read_path(file.path()).unwrap();
        assert_eq!(data.headers, vec!["a", "b"]);
        assert_eq!(data.rows.len(), 1);
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let err = DelimitedReader::new().with_encoding("ebcdic-37").unwrap_err();
        assert!(matches!(err, SqlGenError::Config(_)));
    }
}
