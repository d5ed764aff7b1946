// --- File: crates/bookings_sync/src/lib.rs ---
//! Client-side synchronization of a user's booking list.
//!
//! [`BookingListSync`] holds the bookings of one user, fetched from the
//! remote Booking Service, and mutates that cached copy only after the
//! service confirms a delete or a date change. Collaborators (the service,
//! the confirmation dialog, the notification surface and the local marker
//! store) are injected through the traits in [`bookings_common::services`]
//! and [`store`].
//!
//! # Example
//!
//! ```rust,no_run
//! use bookings_common::{
//!     BookingService, BoxFutureValue, ConfirmRequest, ConfirmationPrompt, Notification, Notifier,
//!     UserIdentity,
//! };
//! use bookings_sync::{BookingListSync, BookingStatusMarkerHook, InMemoryLocalStore};
//! use std::sync::Arc;
//!
//! struct AlwaysYes;
//! impl ConfirmationPrompt for AlwaysYes {
//!     fn confirm(&self, _request: &ConfirmRequest) -> BoxFutureValue<'_, bool> {
//!         Box::pin(async { true })
//!     }
//! }
//!
//! struct Stdout;
//! impl Notifier for Stdout {
//!     fn notify(&self, n: Notification) {
//!         println!("{}: {}", n.title, n.message);
//!     }
//! }
//!
//! async fn run<S: BookingService>(service: S) {
//!     let store = Arc::new(InMemoryLocalStore::new());
//!     let list = BookingListSync::new(
//!         service,
//!         UserIdentity::new("ann@example.com"),
//!         Arc::new(AlwaysYes),
//!         Arc::new(Stdout),
//!     )
//!     .with_post_delete_hook(Arc::new(BookingStatusMarkerHook::new(store)));
//!
//!     let _ = list.load().await;
//!     let _ = list.update_date("65f0", "2024-02-02").await;
//!     let _ = list.delete("65f0").await;
//! }
//! ```

pub mod error;
pub mod hooks;
pub mod identity;
pub mod list;
pub mod store;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{Operation, SyncError};
pub use hooks::{BookingStatusMarkerHook, PostDeleteHook};
pub use identity::ConfiguredIdentity;
pub use list::{BookingListSync, DeleteOutcome, DATE_FORMAT};
pub use store::{
    booking_status_key, FileLocalStore, InMemoryLocalStore, LocalStore, StoreError,
};
