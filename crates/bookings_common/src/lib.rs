// --- File: crates/bookings_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Booking records and server acknowledgements
pub mod services; // Collaborator traits

// Re-export error types and utilities for easier access
pub use error::{config_error, BookingsError};

// Re-export HTTP utilities for easier access
pub use http::client::create_client;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, parse_level};

pub use models::{Booking, DeleteResult, Price, UpdateResult};
pub use services::{
    BookingService, BoxFuture, BoxFutureValue, ConfirmRequest, ConfirmationPrompt,
    IdentityProvider, Notification, NotificationLevel, Notifier, UserIdentity,
};
