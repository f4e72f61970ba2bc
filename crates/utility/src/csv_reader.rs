//! Row-at-a-time reader for delimited text files.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Parse(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Deserialize {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("file has no header row")]
    NoHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub quote: u8,
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
        }
    }
}

/// Reads a delimited file one row at a time.
///
/// Fields are trimmed and rows may have differing lengths. [`row_number`]
/// counts data rows returned so far; the header does not count.
///
/// [`row_number`]: CsvReader::row_number
pub struct CsvReader {
    path: PathBuf,
    options: CsvOptions,
    reader: csv::Reader<File>,
    header: Option<Vec<String>>,
    peeked: Option<csv::StringRecord>,
    row: usize,
}

impl CsvReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CsvError> {
        Self::with_options(path, CsvOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self, CsvError> {
        let path = path.as_ref().to_path_buf();
        let reader = Self::build(&path, &options)?;
        let mut this = Self {
            path,
            options,
            reader,
            header: None,
            peeked: None,
            row: 0,
        };
        this.read_header()?;
        Ok(this)
    }

    fn build(path: &Path, options: &CsvOptions) -> Result<csv::Reader<File>, CsvError> {
        let file = File::open(path).map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(options.delimiter)
            .quote(options.quote)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file))
    }

    fn read_header(&mut self) -> Result<(), CsvError> {
        if self.options.has_header {
            self.header = self
                .next_record()?
                .map(|rec| rec.iter().map(str::to_string).collect());
        }
        Ok(())
    }

    fn next_record(&mut self) -> Result<Option<csv::StringRecord>, CsvError> {
        if let Some(rec) = self.peeked.take() {
            return Ok(Some(rec));
        }
        let mut rec = csv::StringRecord::new();
        if self.reader.read_record(&mut rec)? {
            Ok(Some(rec))
        } else {
            Ok(None)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header fields, or `None` when the file has no header (or is empty).
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn read_row(&mut self) -> Result<Option<Vec<String>>, CsvError> {
        Ok(self.read_record()?.map(|rec| rec.iter().map(str::to_string).collect()))
    }

    fn read_record(&mut self) -> Result<Option<csv::StringRecord>, CsvError> {
        let rec = self.next_record()?;
        if rec.is_some() {
            self.row += 1;
        }
        Ok(rec)
    }

    /// Read the next row into `T`, matching fields by header name.
    pub fn read_as<T: DeserializeOwned>(&mut self) -> Result<Option<T>, CsvError> {
        let header = csv::StringRecord::from(self.header.clone().ok_or(CsvError::NoHeader)?);
        match self.read_record()? {
            None => Ok(None),
            Some(rec) => rec
                .deserialize(Some(&header))
                .map(Some)
                .map_err(|source| CsvError::Deserialize { row: self.row, source }),
        }
    }

    pub fn has_more_rows(&mut self) -> Result<bool, CsvError> {
        if self.peeked.is_none() {
            self.peeked = self.next_record()?;
        }
        Ok(self.peeked.is_some())
    }

    pub fn row_number(&self) -> usize {
        self.row
    }

    /// Reopen the file and start again from the first data row.
    pub fn reset(&mut self) -> Result<(), CsvError> {
        self.reader = Self::build(&self.path, &self.options)?;
        self.header = None;
        self.peeked = None;
        self.row = 0;
        self.read_header()
    }
}

impl std::fmt::Debug for CsvReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvReader")
            .field("path", &self.path)
            .field("options", &self.options)
            .field("row", &self.row)
            .finish()
    }
}
