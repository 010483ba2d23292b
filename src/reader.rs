use crate::date_format::DateFormat;
use crate::errors::QifError;
use crate::record::{FieldValue, Record};
use crate::transaction::Transaction;
use std::io::{BufRead, Cursor};

/// Outcome of pulling one physical record from the source.
#[derive(Debug)]
enum RecordRead {
    /// A complete record, terminated by its `^` line
    Record(Record),
    /// The source ran out, possibly discarding a partial trailing record
    EndOfInput,
    /// The record could not be read; the next call may still find more
    Skip,
}

/// Streaming, replayable parser over a QIF source.
///
/// The reader pulls one record at a time and caches every decoded slot, so
/// iterating twice never re-reads the source. Construction consumes the
/// optional `!` header line; physical end of input drops the source.
///
/// ```rust,ignore
/// use qif_rs::{DateFormat, Reader};
///
/// let mut reader = Reader::from_text(&content, DateFormat::new("dd/mm/yyyy")?)?;
/// reader.each(|transaction| {
///     println!("{} {:?}", transaction.date, transaction.amount);
/// });
/// ```
#[derive(Debug)]
pub struct Reader<R: BufRead> {
    source: Option<R>,
    pending_line: Option<String>,
    format: DateFormat,
    header: String,
    cursor: usize,
    cache: Vec<Option<Transaction>>,
}

impl Reader<Cursor<Vec<u8>>> {
    /// Wrap raw QIF text in an in-memory source.
    pub fn from_text(text: &str, format: DateFormat) -> Result<Self, QifError> {
        Self::new(Cursor::new(text.as_bytes().to_vec()), format)
    }
}

impl<R: BufRead> Reader<R> {
    /// Create a reader over `source` and scan forward to the first header or
    /// record line.
    ///
    /// Lines before the data are skipped. A line starting with `!` becomes
    /// the header label; a line starting with a letter or digit means there
    /// is no header, and that line is kept as the first record line. Fails
    /// with [`QifError::EmptyInput`] when the source ends before either.
    pub fn new(source: R, format: DateFormat) -> Result<Self, QifError> {
        let mut reader = Self {
            source: Some(source),
            pending_line: None,
            format,
            header: String::new(),
            cursor: 0,
            cache: Vec::new(),
        };
        reader.read_header()?;
        Ok(reader)
    }

    /// The label of the `!` header line, or `""` when the file had none.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Visit every transaction in record order.
    ///
    /// Starts over from the first record each time, replaying cached slots
    /// before resuming physical reads. Records that yielded no transaction
    /// are passed over; iteration ends at physical end of input.
    pub fn each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&Transaction),
    {
        self.cursor = 0;
        while let Some(slot) = self.next_slot() {
            if let Some(transaction) = slot {
                visitor(&transaction);
            }
        }
    }

    /// All transactions in the file, materializing the rest of the source.
    ///
    /// Reads to the end on first use; repeated calls answer from the cache.
    pub fn transactions(&mut self) -> Vec<Transaction> {
        self.read_to_end();
        self.cache.iter().flatten().cloned().collect()
    }

    /// Number of transactions in the file, materializing like
    /// [`Reader::transactions`]. Records that decoded to nothing do not
    /// count.
    pub fn len(&mut self) -> usize {
        self.read_to_end();
        self.cache.iter().flatten().count()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    fn read_to_end(&mut self) {
        self.cursor = self.cache.len();
        while self.next_slot().is_some() {}
    }

    /// Advance the cursor one slot: a cached entry is returned as-is, an
    /// uncached index pulls one physical record and caches the outcome (even
    /// a failed decode reserves its slot). `None` means end of data.
    fn next_slot(&mut self) -> Option<Option<Transaction>> {
        let index = self.cursor;
        self.cursor += 1;

        if let Some(slot) = self.cache.get(index) {
            return Some(slot.clone());
        }

        match self.read_record() {
            RecordRead::Record(record) => {
                let transaction = Transaction::read(&record);
                self.cache.push(transaction.clone());
                Some(transaction)
            }
            RecordRead::Skip => {
                self.cache.push(None);
                Some(None)
            }
            RecordRead::EndOfInput => None,
        }
    }

    fn read_header(&mut self) -> Result<(), QifError> {
        loop {
            let line = self
                .next_line()
                .map_err(QifError::ReadContentFailed)?
                .ok_or(QifError::EmptyInput)?;

            if let Some(label) = line.strip_prefix('!') {
                self.header = label.trim().to_string();
                return Ok(());
            }
            if line.starts_with(|c: char| c.is_ascii_alphanumeric()) {
                // No header line. This is already the first record line.
                self.pending_line = Some(line);
                return Ok(());
            }
        }
    }

    /// Tokenize one record: each line's first char is the field code and the
    /// trimmed remainder its value, until the `^` terminator (consumed, not
    /// stored). `D` values that parse under the configured format are stored
    /// as dates.
    ///
    /// Running out of input mid-record discards the partial fields and ends
    /// the stream; any other read fault skips just this record. Both paths
    /// drop the source.
    fn read_record(&mut self) -> RecordRead {
        let mut record = Record::new();

        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.source = None;
                    return RecordRead::EndOfInput;
                }
                Err(_) => {
                    self.source = None;
                    return RecordRead::Skip;
                }
            };

            let mut chars = line.chars();
            let Some(code) = chars.next() else {
                continue;
            };
            if code == '^' {
                return RecordRead::Record(record);
            }

            let value = chars.as_str().trim();
            if code == 'D' {
                if let Some(date) = self.format.parse(value) {
                    record.insert('D', FieldValue::Date(date));
                    continue;
                }
            }
            record.insert(code, FieldValue::Raw(value.to_string()));
        }
    }

    /// Next line without its trailing newline, the buffered header-scan line
    /// first. `Ok(None)` once the source is exhausted or dropped.
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        if let Some(line) = self.pending_line.take() {
            return Ok(Some(line));
        }
        let Some(source) = self.source.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        if source.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
