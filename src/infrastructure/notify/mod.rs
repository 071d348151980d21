//! Notification sinks

pub mod terminal;

pub use terminal::TerminalNotifier;
