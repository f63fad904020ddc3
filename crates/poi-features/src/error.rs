//! Error types for poi-features

use thiserror::Error;

/// Result type alias for strict parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised by the strict `FromStr` parsers.
///
/// The feature extractors swallow these and fall back to default values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text does not start with an `H:MM-H:MM` time range
    #[error("Invalid time range: {0:?}")]
    InvalidTimeRange(String),

    /// Token is not one of the known day abbreviations
    #[error("Unknown day token: {0:?}")]
    UnknownDay(String),
}
