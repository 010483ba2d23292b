use std::fs;
use std::io::{BufRead, Cursor};

use crate::date_format::DateFormat;
use crate::errors::QifError;
use crate::reader::Reader;
use crate::transaction::Transaction;

/// Entry point tying together content loading and reader configuration.
///
/// ```rust,ignore
/// use qif_rs::QifBuilder;
///
/// let transactions = QifBuilder::new()
///     .filepath("statement.qif")
///     .date_format("mm/dd/yyyy")
///     .parse()?;
/// ```
#[derive(Default)]
pub struct QifBuilder {
    content: Option<String>,
    filepath: Option<String>,
    date_format: Option<String>,
}

impl QifBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filepath(mut self, filepath: &str) -> Self {
        self.filepath = Some(filepath.to_string());
        self
    }

    /// Date ordering pattern, `"dd/mm/yyyy"` (default) or `"mm/dd/yyyy"`.
    pub fn date_format(mut self, pattern: &str) -> Self {
        self.date_format = Some(pattern.to_string());
        self
    }

    /// Build a [`Reader`] over the configured input. Content takes priority
    /// over a file path; providing neither is an error.
    pub fn reader(self) -> Result<Reader<Box<dyn BufRead>>, QifError> {
        let format = self
            .date_format
            .map(|pattern| DateFormat::new(&pattern))
            .unwrap_or_else(|| Ok(DateFormat::default()))?;

        let content = self
            .content
            .map(Ok)
            .or_else(|| self.filepath.map(|path| fs::read_to_string(path)))
            .ok_or(QifError::MissingContentAndFilepath)??;

        let source: Box<dyn BufRead> = Box::new(Cursor::new(content.into_bytes()));
        Reader::new(source, format)
    }

    /// Build the reader and materialize every transaction.
    pub fn parse(self) -> Result<Vec<Transaction>, QifError> {
        Ok(self.reader()?.transactions())
    }
}
