//! Tab-separated index iteration.
//!
//! [`TsvIndexReader`] owns a buffered reader over an index file and yields one
//! `Vec<String>` per line, split on `\t`, until the file is exhausted. The
//! file is closed when the reader is dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One index line, split into its tab-separated fields.
pub type IndexRow = Vec<String>;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to open index {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read index line: {0}")]
    Read(#[source] io::Error),
    #[error("index row has {actual} fields, expected at least {expected}")]
    MissingField { expected: usize, actual: usize },
    #[error("index field {field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A lazy, forward-only source of index rows.
pub trait IndexReader: Iterator<Item = Result<IndexRow, IndexError>> {}

impl<I> IndexReader for I where I: Iterator<Item = Result<IndexRow, IndexError>> {}

/// Reads tab-separated rows from a buffered source.
#[derive(Debug)]
pub struct TsvIndexReader<R = BufReader<File>> {
    reader: R,
    line: String,
    done: bool,
}

impl TsvIndexReader<BufReader<File>> {
    /// Open `path` for reading. Fails immediately if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IndexError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> TsvIndexReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            done: false,
        }
    }
}

/// Split a line on tabs, dropping the trailing `\n` or `\r\n`.
pub fn split_row(line: &str) -> IndexRow {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split('\t').map(str::to_string).collect()
}

impl<R: BufRead> Iterator for TsvIndexReader<R> {
    type Item = Result<IndexRow, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(split_row(&self.line))),
            Err(e) => {
                self.done = true;
                Some(Err(IndexError::Read(e)))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for TsvIndexReader<R> {}
