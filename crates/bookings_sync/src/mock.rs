// --- File: crates/bookings_sync/src/mock.rs ---
//! In-process stand-ins for the list's collaborators, for tests.

use bookings_common::{
    Booking, BookingService, BoxFuture, BoxFutureValue, ConfirmRequest, ConfirmationPrompt,
    DeleteResult, Notification, Notifier, UpdateResult,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockServiceError {
    #[error("mock booking service unavailable")]
    Unavailable,
}

/// A request the mock service received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(String),
    Delete(String),
    Update(String, Booking),
}

/// Remote collection kept in memory, keyed by user email.
///
/// Affected counts follow the document-store semantics the real service
/// has: a delete of an unknown id reports 0, an update that changes nothing
/// reports 0. Both can be forced with the `force_*` setters.
#[derive(Default)]
pub struct MockBookingService {
    collections: Mutex<HashMap<String, Vec<Booking>>>,
    calls: Mutex<Vec<Call>>,
    forced_deleted_count: Mutex<Option<u64>>,
    forced_modified_count: Mutex<Option<u64>>,
    unavailable: AtomicBool,
}

impl MockBookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(email: &str, bookings: Vec<Booking>) -> Self {
        let service = Self::new();
        service
            .collections
            .lock()
            .unwrap()
            .insert(email.to_string(), bookings);
        service
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn force_deleted_count(&self, count: u64) {
        *self.forced_deleted_count.lock().unwrap() = Some(count);
    }

    pub fn force_modified_count(&self, count: u64) {
        *self.forced_modified_count.lock().unwrap() = Some(count);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn remote_bookings(&self, email: &str) -> Vec<Booking> {
        self.collections
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call) -> Result<(), MockServiceError> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(MockServiceError::Unavailable);
        }
        Ok(())
    }
}

impl BookingService for MockBookingService {
    type Error = MockServiceError;

    fn list_bookings(&self, email: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let email = email.to_string();
        Box::pin(async move {
            self.record(Call::List(email.clone()))?;
            Ok(self.remote_bookings(&email))
        })
    }

    fn delete_booking(&self, id: &str) -> BoxFuture<'_, DeleteResult, Self::Error> {
        let id = id.to_string();
        Box::pin(async move {
            self.record(Call::Delete(id.clone()))?;

            if let Some(count) = *self.forced_deleted_count.lock().unwrap() {
                return Ok(DeleteResult {
                    deleted_count: count,
                });
            }

            let mut collections = self.collections.lock().unwrap();
            let mut deleted = 0;
            for bookings in collections.values_mut() {
                let before = bookings.len();
                bookings.retain(|b| b.id != id);
                deleted += (before - bookings.len()) as u64;
            }
            Ok(DeleteResult {
                deleted_count: deleted,
            })
        })
    }

    fn update_booking(&self, id: &str, booking: &Booking) -> BoxFuture<'_, UpdateResult, Self::Error> {
        let id = id.to_string();
        let booking = booking.clone();
        Box::pin(async move {
            self.record(Call::Update(id.clone(), booking.clone()))?;

            if let Some(count) = *self.forced_modified_count.lock().unwrap() {
                return Ok(UpdateResult {
                    modified_count: count,
                    error: None,
                });
            }

            let mut collections = self.collections.lock().unwrap();
            let mut modified = 0;
            for existing in collections.values_mut().flatten() {
                if existing.id == id && *existing != booking {
                    *existing = booking.clone();
                    modified += 1;
                }
            }
            Ok(UpdateResult {
                modified_count: modified,
                error: None,
            })
        })
    }
}

/// Answers confirmation prompts from a script; declines once it runs out.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<ConfirmRequest> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> BoxFutureValue<'_, bool> {
        self.asked.lock().unwrap().push(request.clone());
        let answer = self.answers.lock().unwrap().pop_front().unwrap_or(false);
        Box::pin(async move { answer })
    }
}

/// A user who never answers.
pub struct UnansweredPrompt;

impl ConfirmationPrompt for UnansweredPrompt {
    fn confirm(&self, _request: &ConfirmRequest) -> BoxFutureValue<'_, bool> {
        Box::pin(std::future::pending())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
