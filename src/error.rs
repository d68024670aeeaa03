//! Error types for rs-readability.
//!
//! The scoring and classification core is total; errors only come from the
//! input boundary (parsing and option validation).

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// The page URL given in the options is not an absolute http(s) URL.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
