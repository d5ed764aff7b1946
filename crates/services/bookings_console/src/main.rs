// --- File: crates/services/bookings_console/src/main.rs ---
use bookings_common::{config_error, logging, BookingService, BookingsError, IdentityProvider};
use bookings_config::{env_vars::config_path_to_env_var, load_config};
use bookings_http::HttpBookingService;
use bookings_sync::{
    BookingListSync, BookingStatusMarkerHook, ConfiguredIdentity, DeleteOutcome, FileLocalStore,
};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

mod console;
mod table;

use console::{read_line, stdin_lines, Command, ConsoleNotifier, StdinPrompt, HELP};

/// Loads the list and renders it, or `None` when the load failed.
async fn load_and_render<S: BookingService>(list: &BookingListSync<S>) -> Option<String> {
    list.load().await.ok()?;
    Some(table::render(&list.bookings().await))
}

#[tokio::main]
async fn main() -> Result<(), BookingsError> {
    let config = load_config().map_err(config_error)?;
    logging::init_with_level(logging::parse_level(&config.logging.level));

    let service = HttpBookingService::from_config(&config.booking_service)?;
    info!("Booking service at {}", service.base_url());

    let identity = ConfiguredIdentity::new(&config.identity).current_user();
    let store = Arc::new(FileLocalStore::new(&config.local_store.path));
    let input = stdin_lines();

    let list = BookingListSync::new(
        service,
        identity,
        Arc::new(StdinPrompt::new(input.clone())),
        Arc::new(ConsoleNotifier),
    )
    .with_post_delete_hook(Arc::new(BookingStatusMarkerHook::new(store)));

    match list.identity().email() {
        Some(email) => println!("Signed in as {}", email),
        None => println!(
            "Not signed in. Set {} to see your bookings.",
            config_path_to_env_var("identity.email")
        ),
    }

    if let Some(rendered) = load_and_render(&list).await {
        print!("{}", rendered);
    }
    println!("{}", HELP);

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let Some(line) = read_line(&input).await else {
            break;
        };
        let command = match console::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::List => print!("{}", table::render(&list.bookings().await)),
            // Load failures are logged by the list and leave the table as it was.
            Command::Reload => {
                if let Some(rendered) = load_and_render(&list).await {
                    print!("{}", rendered);
                }
            }
            // Outcome notifications come from the list itself.
            Command::Delete(id) => {
                if let Ok(DeleteOutcome::Declined) = list.delete(&id).await {
                    println!("Kept booking {}", id);
                }
            }
            // Update failures are only logged; the table shows whether it applied.
            Command::Reschedule { id, date } => match list.update_date(&id, &date).await {
                Ok(booking) => println!("Booking {} moved to {}", booking.id, booking.date),
                Err(e) => warn!("Reschedule of {} not applied: {}", id, e),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    info!("Console closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookings_common::{
        Booking, BoxFuture, BoxFutureValue, ConfirmRequest, ConfirmationPrompt, DeleteResult,
        Notification, Notifier, UpdateResult, UserIdentity,
    };
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FlakyService {
        down: AtomicBool,
    }

    impl BookingService for FlakyService {
        type Error = io::Error;

        fn list_bookings(&self, _email: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
            Box::pin(async move {
                if self.down.load(Ordering::SeqCst) {
                    return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "down"));
                }
                Ok(vec![Booking::new("a", "Oil change", "2024-01-01")])
            })
        }

        fn delete_booking(&self, _id: &str) -> BoxFuture<'_, DeleteResult, Self::Error> {
            Box::pin(async { Ok(DeleteResult { deleted_count: 0 }) })
        }

        fn update_booking(
            &self,
            _id: &str,
            _booking: &Booking,
        ) -> BoxFuture<'_, UpdateResult, Self::Error> {
            Box::pin(async {
                Ok(UpdateResult {
                    modified_count: 0,
                    error: None,
                })
            })
        }
    }

    struct Never;

    impl ConfirmationPrompt for Never {
        fn confirm(&self, _request: &ConfirmRequest) -> BoxFutureValue<'_, bool> {
            Box::pin(async { false })
        }
    }

    #[derive(Default)]
    struct Recorded(Mutex<Vec<Notification>>);

    impl Notifier for Recorded {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn list_for(identity: UserIdentity, notifier: Arc<Recorded>) -> BookingListSync<FlakyService> {
        BookingListSync::new(FlakyService::default(), identity, Arc::new(Never), notifier)
    }

    #[tokio::test]
    async fn test_load_and_render_shows_table() {
        let list = list_for(UserIdentity::new("ann@example.com"), Arc::default());

        let rendered = load_and_render(&list).await.unwrap();

        assert!(rendered.starts_with("Your bookings: 1"));
        assert!(rendered.contains("Oil change"));
    }

    #[tokio::test]
    async fn test_failed_reload_prints_and_notifies_nothing() {
        let notifier = Arc::new(Recorded::default());
        let list = list_for(UserIdentity::new("ann@example.com"), notifier.clone());
        assert!(load_and_render(&list).await.is_some());

        list.service().down.store(true, Ordering::SeqCst);

        assert_eq!(load_and_render(&list).await, None);
        assert_eq!(list.len().await, 1);
        assert!(notifier.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_signed_out_load_prints_nothing() {
        let list = list_for(UserIdentity::anonymous(), Arc::default());

        assert_eq!(load_and_render(&list).await, None);
    }
}
