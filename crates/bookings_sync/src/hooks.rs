// --- File: crates/bookings_sync/src/hooks.rs ---
//! Side effects that run after the server has confirmed a delete.
//!
//! Hooks never run for a declined, failed or unapplied delete. A failing hook
//! is logged and does not undo the local commit.

use bookings_common::UserIdentity;
use std::sync::Arc;
use tracing::debug;

use crate::error::SyncError;
use crate::store::{booking_status_key, LocalStore};

pub trait PostDeleteHook: Send + Sync {
    fn after_delete(&self, identity: &UserIdentity, id: &str) -> Result<(), SyncError>;
}

/// Clears the `roomBookingStatus_<email>_<id>` marker of a deleted booking.
pub struct BookingStatusMarkerHook {
    store: Arc<dyn LocalStore>,
}

impl BookingStatusMarkerHook {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

impl PostDeleteHook for BookingStatusMarkerHook {
    fn after_delete(&self, identity: &UserIdentity, id: &str) -> Result<(), SyncError> {
        // Markers are keyed by email; nothing to clear for an anonymous user.
        let Some(email) = identity.email() else {
            return Ok(());
        };

        let key = booking_status_key(email, id);
        let removed = self.store.remove(&key)?;
        debug!(%key, removed, "booking status marker cleared");
        Ok(())
    }
}
