//! Error types for jettison-pbx operations.

use thiserror::Error;

/// The error type for jettison-pbx operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not valid OpenStep property-list text.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A specialized Result type for jettison-pbx operations.
pub type Result<T> = std::result::Result<T, Error>;
