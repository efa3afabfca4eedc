/// Error type for the linkshelf library
///
/// Import, persistence and lookup failures each get their own variant so front
/// ends can decide which ones to report and which ones to swallow.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    /// JSON import that failed to parse or whose root is not an array
    #[error("Invalid import payload: {0}")]
    InvalidImportPayload(String),

    /// Lookup of a bookmark id that is not in the collection
    #[error("Bookmark with ID {0} not found")]
    UnknownRecordReference(String),

    /// CSV line with too few fields; importers skip these
    #[error("Malformed import line {line}: {reason}")]
    MalformedImportLine { line: usize, reason: String },

    /// Writing or reading a persisted snapshot failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// SQLite-backed storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// HTML parsing errors
    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Import or export format that is not supported
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for ShelfError {
    fn from(err: simd_json::Error) -> Self {
        ShelfError::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ShelfError {
    fn from(err: serde_yaml::Error) -> Self {
        ShelfError::Config(err.to_string())
    }
}

impl From<tl::ParseError> for ShelfError {
    fn from(err: tl::ParseError) -> Self {
        ShelfError::HtmlParse(err.to_string())
    }
}

impl From<csv::Error> for ShelfError {
    fn from(err: csv::Error) -> Self {
        ShelfError::Csv(err.to_string())
    }
}
