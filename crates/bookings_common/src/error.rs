// --- File: crates/bookings_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the bookings crates.
///
/// Crate-specific errors such as `RemoteError` convert into this type when
/// they cross a crate boundary that does not care about the details.
#[derive(Error, Debug)]
pub enum BookingsError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred while reading or writing the local store
    #[error("Storage error: {0}")]
    StorageError(String),
}

// Common error conversions
impl From<reqwest::Error> for BookingsError {
    fn from(err: reqwest::Error) -> Self {
        BookingsError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for BookingsError {
    fn from(err: serde_json::Error) -> Self {
        BookingsError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for BookingsError {
    fn from(err: std::io::Error) -> Self {
        BookingsError::StorageError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> BookingsError {
    BookingsError::ConfigError(message.to_string())
}
