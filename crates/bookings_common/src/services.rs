// --- File: crates/bookings_common/src/services.rs ---
//! Service abstractions for the collaborators of the booking list.
//!
//! The synchronizer only talks to these traits, so the remote service, the
//! confirmation dialog, the notification surface and the local marker store
//! can all be swapped out (for a terminal front end, or for tests).

use crate::models::{Booking, DeleteResult, UpdateResult};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Type alias for a boxed future with a plain output
pub type BoxFutureValue<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote collection of bookings.
pub trait BookingService: Send + Sync {
    /// Error type returned by booking service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// All bookings belonging to `email`, in server order.
    fn list_bookings(&self, email: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error>;

    /// Delete one booking.
    fn delete_booking(&self, id: &str) -> BoxFuture<'_, DeleteResult, Self::Error>;

    /// Partially update one booking. `booking` is the full updated record.
    fn update_booking(&self, id: &str, booking: &Booking) -> BoxFuture<'_, UpdateResult, Self::Error>;
}

/// The signed-in user, passed explicitly to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// `None` while unauthenticated
    pub email: Option<String>,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { email: None }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Supplies the current user's identity.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> UserIdentity;
}

impl IdentityProvider for UserIdentity {
    fn current_user(&self) -> UserIdentity {
        self.clone()
    }
}

/// Content of a yes/no confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    /// The dialog shown before a booking is deleted.
    pub fn delete_booking() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "You won't be able to revert this!".to_string(),
            confirm_label: "Yes, delete it!".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// A blocking yes/no prompt.
///
/// The returned future resolves once the user answers; there is no timeout.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, request: &ConfirmRequest) -> BoxFutureValue<'_, bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Surface for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
