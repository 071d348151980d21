use console::style;
use std::io::{self, Write};

use crate::domain::models::{Notification, Severity};
use crate::domain::ports::Notifier;

/// Prints notifications to the terminal.
///
/// Notifications always go to stderr, styled in human mode and as one JSON
/// object per line in JSON mode. Stdout is left to the command's own result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    json: bool,
}

impl TerminalNotifier {
    /// Create a notifier; `json` selects machine-readable output.
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Write one notification line to `out`.
    pub fn write_to(&self, out: &mut impl Write, notification: &Notification) -> io::Result<()> {
        if self.json {
            let line = serde_json::to_string(notification)?;
            writeln!(out, "{line}")
        } else {
            writeln!(out, "{}", render_line(notification))
        }
    }
}

/// Render a notification as a single human-readable line.
pub fn render_line(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Info => style("\u{2713}").green().bold(),
        Severity::Destructive => style("\u{2717}").red().bold(),
    };

    match &notification.title {
        Some(title) => format!(
            "{} {} {}",
            marker,
            style(title).bold(),
            notification.description
        ),
        None => format!("{} {}", marker, notification.description),
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.write_to(&mut io::stderr().lock(), &notification);
    }
}
