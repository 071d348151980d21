//! CLI output formatting module
//!
//! Commands produce a value implementing [`CommandOutput`]; [`output`] picks
//! the human or JSON rendering.

pub mod table;

use console::style;
use serde::Serialize;

pub use table::format_sections_table;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    /// Terminal rendering
    fn to_human(&self) -> String;

    /// Machine-readable rendering
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a failure line.
pub fn action_failure(message: &str) -> String {
    format!("{} {}", style("\u{2717}").red().bold(), message)
}

/// Render a dimmed hint line.
pub fn hint(message: &str) -> String {
    style(message).dim().to_string()
}
