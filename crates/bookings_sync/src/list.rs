// --- File: crates/bookings_sync/src/list.rs ---
//! The user's booking list and its synchronization with the Booking Service.
//!
//! Local state only changes after the server confirms a change through its
//! affected-count field (`deletedCount` / `modifiedCount`). Each mutation runs
//! as a fixed pipeline:
//!
//! ```text
//! precondition -> confirm (delete only) -> request -> interpret count -> commit | reject
//! ```
//!
//! The list lock is never held across a network call or a prompt, so
//! operations can interleave. Commits locate the entry by id at commit time;
//! two overlapping operations on the same id resolve last-writer-wins.

use bookings_common::{
    Booking, BookingService, ConfirmRequest, ConfirmationPrompt, Notification, Notifier,
    UserIdentity,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::error::{Operation, SyncError};
use crate::hooks::PostDeleteHook;

/// Format of booking dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DELETED_TITLE: &str = "Deleted!";
const DELETED_MESSAGE: &str = "Your Booking has been deleted.";
const DELETE_FAILED_TITLE: &str = "Error!";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete your booking. Please try again later.";

/// How a delete request ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server deleted the booking and it left the local list
    Deleted { id: String },
    /// The user said no; nothing was sent
    Declined,
}

#[derive(Debug, Default)]
struct ListState {
    bookings: Vec<Booking>,
    loaded: bool,
}

/// Cached, ordered list of one user's bookings.
pub struct BookingListSync<S: BookingService> {
    service: S,
    identity: UserIdentity,
    prompt: Arc<dyn ConfirmationPrompt>,
    notifier: Arc<dyn Notifier>,
    post_delete: Vec<Arc<dyn PostDeleteHook>>,
    state: RwLock<ListState>,
}

impl<S: BookingService> BookingListSync<S> {
    /// Creates an empty, not yet loaded list for `identity`.
    pub fn new(
        service: S,
        identity: UserIdentity,
        prompt: Arc<dyn ConfirmationPrompt>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            identity,
            prompt,
            notifier,
            post_delete: Vec::new(),
            state: RwLock::new(ListState::default()),
        }
    }

    /// Registers a hook that runs after every server-confirmed delete.
    pub fn with_post_delete_hook(mut self, hook: Arc<dyn PostDeleteHook>) -> Self {
        self.post_delete.push(hook);
        self
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the current list, in order.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.state.read().await.bookings.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.bookings.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.bookings.is_empty()
    }

    /// Whether a load has succeeded at least once.
    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.loaded
    }

    pub async fn get(&self, id: &str) -> Option<Booking> {
        self.state
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Fetches every booking of the current user and replaces the list.
    ///
    /// Failures are logged only; the list keeps whatever it held before
    /// (empty on first load). Returns the number of bookings loaded.
    pub async fn load(&self) -> Result<usize, SyncError> {
        let result = self.fetch_and_replace().await;
        if let Err(e) = &result {
            error!(error = %e, "Error fetching bookings");
        }
        result
    }

    async fn fetch_and_replace(&self) -> Result<usize, SyncError> {
        let email = self.identity.email().ok_or(SyncError::Unauthenticated)?;

        let bookings = self
            .service
            .list_bookings(email)
            .await
            .map_err(SyncError::remote)?;

        let count = bookings.len();
        let mut state = self.state.write().await;
        state.bookings = bookings;
        state.loaded = true;
        info!(email, count, "bookings loaded");
        Ok(count)
    }

    /// Deletes a booking after the user confirms.
    ///
    /// Declining sends nothing and changes nothing. A server-confirmed delete
    /// removes the entry, runs the post-delete hooks and notifies success.
    /// A zero `deletedCount` or a failed request leaves the list as it was
    /// and notifies failure.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, SyncError> {
        info!(id, "Deleting booking");

        if !self.prompt.confirm(&ConfirmRequest::delete_booking()).await {
            info!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match self.request_delete(id).await {
            Ok(()) => {
                self.commit_delete(id).await;
                self.notifier
                    .notify(Notification::success(DELETED_TITLE, DELETED_MESSAGE));
                Ok(DeleteOutcome::Deleted { id: id.to_string() })
            }
            Err(e) => {
                error!(id, error = %e, "Error deleting booking");
                self.notifier
                    .notify(Notification::error(DELETE_FAILED_TITLE, DELETE_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    async fn request_delete(&self, id: &str) -> Result<(), SyncError> {
        let result = self
            .service
            .delete_booking(id)
            .await
            .map_err(SyncError::remote)?;

        info!(id, deleted_count = result.deleted_count, "Delete response");
        if !result.is_applied() {
            return Err(SyncError::NotApplied {
                operation: Operation::Delete,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn commit_delete(&self, id: &str) {
        {
            let mut state = self.state.write().await;
            let before = state.bookings.len();
            state.bookings.retain(|b| b.id != id);
            if state.bookings.len() == before {
                warn!(id, "deleted booking was not in the local list");
            }
        }

        for hook in &self.post_delete {
            if let Err(e) = hook.after_delete(&self.identity, id) {
                warn!(id, error = %e, "post-delete hook failed");
            }
        }
    }

    /// Moves a booking to `new_date` (`YYYY-MM-DD`).
    ///
    /// The whole record, with only the date replaced, is sent to the server.
    /// A positive `modifiedCount` replaces the entry in place. Every failure
    /// (unknown id, bad date, zero count, failed request) is logged only and
    /// leaves the list unchanged. Returns the updated booking.
    pub async fn update_date(&self, id: &str, new_date: &str) -> Result<Booking, SyncError> {
        let result = self.try_update_date(id, new_date).await;
        match &result {
            Err(SyncError::NotFound(_)) => error!(id, "Booking not found with ID"),
            Err(e @ SyncError::Remote(_)) => error!(id, error = %e, "Error updating date"),
            Err(e) => error!(id, new_date, error = %e, "Failed to update booking date"),
            Ok(_) => {}
        }
        result
    }

    async fn try_update_date(&self, id: &str, new_date: &str) -> Result<Booking, SyncError> {
        let existing = self
            .get(id)
            .await
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;

        NaiveDate::parse_from_str(new_date, DATE_FORMAT)
            .map_err(|_| SyncError::InvalidDate(new_date.to_string()))?;

        let updated = existing.with_date(new_date);

        let result = self
            .service
            .update_booking(id, &updated)
            .await
            .map_err(SyncError::remote)?;

        if !result.is_applied() {
            if let Some(server_error) = &result.error {
                warn!(id, %server_error, "server rejected booking update");
            }
            return Err(SyncError::NotApplied {
                operation: Operation::Update,
                id: id.to_string(),
            });
        }

        let mut state = self.state.write().await;
        match state.bookings.iter_mut().find(|b| b.id == id) {
            Some(entry) => *entry = updated.clone(),
            None => warn!(id, "updated booking left the local list before commit"),
        }
        info!(id, date = %updated.date, "Booking date updated successfully");
        Ok(updated)
    }
}
