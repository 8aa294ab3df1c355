//! Error types for the extraction library.
//!
//! Pattern mismatches are not errors: extractors that find nothing return `None`
//! or an empty collection. The variants below cover caller misuse, geometric
//! preconditions and failures of the text collaborators (loader, vectorizer).

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation that needs at least one input was given none
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Keyword strategy name not recognised
    #[error("Unsupported keyword strategy: '{0}'")]
    UnsupportedStrategy(String),

    /// The term-document vectorizer could not be fitted
    #[error("Vectorizer error: {0}")]
    Vectorizer(String),

    /// A configuration value is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unsupported feature (e.g. a source kind the loader cannot read)
    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error
    #[error("UTF-8 decoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
