use multitool_core::{Notification, Notifier, Variant};
use tracing::debug;

/// Prints notifications to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notification: &Notification) -> String {
        let icon = match notification.variant {
            Variant::Default => "✓",
            Variant::Destructive => "✗",
            Variant::Warning => "⚠",
        };
        match &notification.description {
            Some(description) => format!("{} {}: {}", icon, notification.title, description),
            None => format!("{} {}", icon, notification.title),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        debug!("Notification: {:?}", notification);
        let line = Self::render(&notification);
        match notification.variant {
            Variant::Default => println!("{}", line),
            Variant::Destructive | Variant::Warning => eprintln!("{}", line),
        }
    }
}
