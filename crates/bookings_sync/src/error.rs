// --- File: crates/bookings_sync/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::store::StoreError;

/// Which remote mutation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Delete,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Delete => f.write_str("delete"),
            Operation::Update => f.write_str("update"),
        }
    }
}

/// Why a list operation did not change the local list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// No signed-in user to scope the request to
    #[error("No authenticated user")]
    Unauthenticated,

    /// Transport, status or decode failure talking to the Booking Service
    #[error("Booking service request failed: {0}")]
    Remote(String),

    /// The server answered but reported zero affected records
    #[error("Server did not apply {operation} of booking {id}")]
    NotApplied { operation: Operation, id: String },

    /// The id is not in the local list
    #[error("Booking not found with ID: {0}")]
    NotFound(String),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Local store error: {0}")]
    Store(String),
}

impl SyncError {
    pub(crate) fn remote<E: std::error::Error>(err: E) -> Self {
        SyncError::Remote(err.to_string())
    }
}

impl From<StoreError> for SyncError {
    fn from(err: StoreError) -> Self {
        SyncError::Store(err.to_string())
    }
}
