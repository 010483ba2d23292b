use thiserror::Error;

/// Errors surfaced by the public API.
///
/// Record-level problems (an unparseable date, a truncated trailing record)
/// are deliberately not represented here: they degrade to "no transaction for
/// that record" during iteration instead of failing the whole stream.
#[derive(Error, Debug)]
pub enum QifError {
    /// The date format pattern is not one of the two supported orderings
    #[error("Unsupported date format: {0:?} (expected \"dd/mm/yyyy\" or \"mm/dd/yyyy\")")]
    UnsupportedDateFormat(String),

    /// The source ended before a header line or a record line was found
    #[error("No QIF header or record data found in input")]
    EmptyInput,

    /// I/O failure while reading from the source or a file path
    #[error("Failed to read content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was finished without content and without a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,
}

/// Convenient alias for Result with the crate error type
pub type QifResult<T> = Result<T, QifError>;
