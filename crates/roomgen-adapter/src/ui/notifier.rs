//! Notifiers

use console::{style, Term};
use roomgen_domain::Notifier;
use tracing::warn;

/// Prints notifications to stderr
#[derive(Debug)]
pub struct ConsoleNotifier {
    term: Term,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&mut self, title: &str, message: &str) {
        let line = format!("{} {}", style(format!("[{}]", title)).bold().cyan(), message);
        if let Err(e) = self.term.write_line(&line) {
            warn!(error = %e, title, message, "Could not write notification");
        }
    }
}

/// A notification as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Keeps every notification for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    shown: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.shown
    }

    pub fn last(&self) -> Option<&Notification> {
        self.shown.last()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.shown.iter().map(|n| n.title.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, title: &str, message: &str) {
        self.shown.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
