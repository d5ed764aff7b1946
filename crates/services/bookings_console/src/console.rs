// --- File: crates/services/bookings_console/src/console.rs ---
//! Terminal implementations of the prompt and notifier, plus command parsing.

use bookings_common::{
    BoxFutureValue, ConfirmRequest, ConfirmationPrompt, Notification, NotificationLevel, Notifier,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Stdin shared between the command loop and the confirmation prompt.
pub type SharedInput = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> SharedInput {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Reads one line. `None` on end of input or read error.
pub async fn read_line(input: &SharedInput) -> Option<String> {
    input.lock().await.next_line().await.ok().flatten()
}

fn prompt_flush(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

/// Yes/no prompt on the terminal. Anything but an explicit yes declines.
pub struct StdinPrompt {
    input: SharedInput,
}

impl StdinPrompt {
    pub fn new(input: SharedInput) -> Self {
        Self { input }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> BoxFutureValue<'_, bool> {
        let question = format!(
            "{} {}\n[y] {} / [n] {}: ",
            request.title, request.text, request.confirm_label, request.cancel_label
        );
        Box::pin(async move {
            prompt_flush(&question);
            read_line(&self.input)
                .await
                .map(|answer| is_yes(&answer))
                .unwrap_or(false)
        })
    }
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.level {
            NotificationLevel::Success => "✔",
            NotificationLevel::Error => "✘",
        };
        println!("{} {} {}", marker, notification.title, notification.message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,
    Delete(String),
    Reschedule { id: String, date: String },
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                   show your bookings
  reload                 fetch your bookings again
  delete <id>            cancel a booking
  date <id> <YYYY-MM-DD> move a booking to another day
  help                   show this text
  quit                   leave";

/// Parses one input line. `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb.to_lowercase().as_str(), args.as_slice()) {
        ("list" | "ls", []) => Command::List,
        ("reload", []) => Command::Reload,
        ("delete" | "rm", [id]) => Command::Delete(id.to_string()),
        ("date" | "reschedule", [id, date]) => Command::Reschedule {
            id: id.to_string(),
            date: date.to_string(),
        },
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        _ => return Err(format!("Unrecognized command: {}", line.trim())),
    };
    Ok(Some(command))
}
