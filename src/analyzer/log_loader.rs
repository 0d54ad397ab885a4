//! Line-oriented reading of simulation log files.
//!
//! Every log starts with a single header line that is discarded unread, followed by
//! whitespace-separated data rows. The loader owns its file handle and releases it
//! when dropped, so each parser holds its file open only for its own duration.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Fatal error raised while reading or parsing a log file.
#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {file} at line {line}: {source}")]
    Read {
        file: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}:{line}: expected {expected} fields, found {found}")]
    FieldCount {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{file}:{line}: invalid {column} value {token:?}")]
    InvalidNumber {
        file: String,
        line: usize,
        column: &'static str,
        token: String,
    },
}

/// One data row split into its fields.
#[derive(Debug)]
pub struct Row<'a> {
    source: &'a str,
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// 1-based line number of this row in its file (the header is line 1).
    pub fn line(&self) -> usize {
        self.line
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Parse field `index` as `T`, naming the column in the error on failure.
    pub fn parse<T: FromStr>(&self, index: usize, column: &'static str) -> Result<T, LogParseError> {
        let token = self.fields[index];
        token.parse().map_err(|_| LogParseError::InvalidNumber {
            file: self.source.to_string(),
            line: self.line,
            column,
            token: token.to_string(),
        })
    }
}

/// Header-skipping row reader over any buffered source.
pub struct LogLoader<R> {
    reader: R,
    source: String,
    line_number: usize,
    header_skipped: bool,
    line_buffer: String,
}

/// Open a log file from disk for buffered reading.
///
/// # Returns
///
/// `Ok(reader)` if the file opens, `Err(LogParseError::Open)` otherwise.
pub fn open_log(path: &Path) -> Result<BufReader<File>, LogParseError> {
    let file = File::open(path).map_err(|source| LogParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::with_capacity(BUFFER_SIZE, file))
}

impl<R: BufRead> LogLoader<R> {
    /// Wrap an already open reader. `source` is only used in error messages.
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
            line_number: 0,
            header_skipped: false,
            line_buffer: String::with_capacity(256),
        }
    }

    /// Read the next data row and check that it has exactly `expected_fields` fields.
    ///
    /// The header line is consumed on the first call. Every later line is a data row,
    /// so a blank line fails the field count check like any other short row.
    ///
    /// # Returns
    ///
    /// `Ok(Some(row))` for a data row, `Ok(None)` at end of file.
    pub fn next_row(&mut self, expected_fields: usize) -> Result<Option<Row<'_>>, LogParseError> {
        if !self.header_skipped {
            self.header_skipped = true;
            if !self.read_line()? {
                return Ok(None);
            }
        }

        if !self.read_line()? {
            return Ok(None);
        }

        let fields: Vec<&str> = self.line_buffer.split_whitespace().collect();
        if fields.len() != expected_fields {
            return Err(LogParseError::FieldCount {
                file: self.source.clone(),
                line: self.line_number,
                expected: expected_fields,
                found: fields.len(),
            });
        }

        Ok(Some(Row {
            source: &self.source,
            line: self.line_number,
            fields,
        }))
    }

    /// Read one raw line into the buffer. Returns `false` at end of file.
    fn read_line(&mut self) -> Result<bool, LogParseError> {
        self.line_buffer.clear();
        let read = self.reader.read_line(&mut self.line_buffer).map_err(|source| LogParseError::Read {
            file: self.source.clone(),
            line: self.line_number + 1,
            source,
        })?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }
}
