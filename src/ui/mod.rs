//! Presentation seams used by the API layer.
//!
//! The client never prints or navigates on its own; it raises an [`Alert`]
//! through a [`Notifier`] and asks a [`Navigator`] to move to another page.
//! The CLI supplies console-backed implementations.

pub mod alert;

pub use alert::Alert;

use std::sync::Mutex;

/// Page the user is sent to when the session is no longer valid.
pub const LOGIN_PATH: &str = "/member/login";

/// Surfaces user-facing alerts.
pub trait Notifier: Send + Sync {
    fn alert(&self, alert: &Alert);
}

/// Replaces the current location.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Prints alerts to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, alert: &Alert) {
        eprintln!("{}", alert.message());
    }
}

/// Records the most recent redirect so the CLI can act on it after a command.
#[derive(Debug, Default)]
pub struct CliNavigator {
    target: Mutex<Option<String>>,
}

impl CliNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending redirect target, if any.
    pub fn take_redirect(&self) -> Option<String> {
        match self.target.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl Navigator for CliNavigator {
    fn redirect(&self, path: &str) {
        log::info!("Redirecting to {}", path);
        match self.target.lock() {
            Ok(mut guard) => *guard = Some(path.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(path.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_navigator_take_clears() {
        let nav = CliNavigator::new();
        assert_eq!(nav.take_redirect(), None);

        nav.redirect(LOGIN_PATH);
        assert_eq!(nav.take_redirect().as_deref(), Some("/member/login"));
        assert_eq!(nav.take_redirect(), None);
    }

    #[test]
    fn test_cli_navigator_keeps_latest() {
        let nav = CliNavigator::new();
        nav.redirect("/a");
        nav.redirect("/b");
        assert_eq!(nav.take_redirect().as_deref(), Some("/b"));
    }
}
