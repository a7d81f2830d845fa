//! CSV document loader.
//!
//! Reads tabular data whose first row is a header and whose columns are, by
//! position, `id,title,date,content`:
//! ```csv
//! id,title,date,content
//! 1,Cats,2024-01-02,cats are independent pets
//! 2,Dogs,2024-01-03,dogs are loyal pets
//! ```
//!
//! Malformed rows degrade instead of aborting the load: a non-numeric ID
//! becomes `0` and missing trailing columns become empty strings. Only I/O
//! failures and broken CSV structure are errors.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use ::csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::document::{DocId, Document};
use crate::error::{GladiusError, Result};

/// Loads [`Document`]s from CSV input, in source row order.
#[derive(Debug, Clone)]
pub struct CsvDocumentLoader {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for CsvDocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvDocumentLoader {
    /// Create a new CSV loader with comma delimiter.
    pub fn new() -> Self {
        CsvDocumentLoader { delimiter: b',' }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load every document of a CSV file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::open(path)?;
        let docs = self.load_reader(file)?;
        info!(
            "Loaded {} documents from {} in {:?}",
            docs.len(),
            path.display(),
            start.elapsed()
        );
        Ok(docs)
    }

    /// Load every document from a reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<Document>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        if reader.headers()?.is_empty() {
            return Err(GladiusError::other("CSV input has no header row"));
        }

        let mut docs = Vec::new();
        for record in reader.records() {
            docs.push(Self::record_to_document(&record?));
        }

        debug!("Parsed {} CSV rows", docs.len());
        Ok(docs)
    }

    fn record_to_document(record: &StringRecord) -> Document {
        let column = |i: usize| record.get(i).unwrap_or_default().to_string();
        let id: DocId = record
            .get(0)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        Document::new(id, column(1), column(2), column(3))
    }
}
