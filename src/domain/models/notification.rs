use serde::Serialize;
use std::fmt;

/// Title shown on every failed delete.
pub const DELETE_FAILED_TITLE: &str = "Failed to delete house section.";

/// Description shown when a delete fails for a reason the client does not recognize.
pub const CONTACT_ADMIN_DESCRIPTION: &str = "Please contact an administrator.";

/// Description shown once a delete has been acknowledged and waited on.
pub const DELETE_SUCCEEDED_DESCRIPTION: &str = "House section deleted successfully.";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral or success message
    Info,
    /// Failure the user should act on
    Destructive,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Destructive => write!(f, "destructive"),
        }
    }
}

/// A message for the human operating the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// How the message should be styled
    pub severity: Severity,
    /// Optional heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text
    pub description: String,
}

impl Notification {
    /// Untitled informational message.
    pub fn info(description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: None,
            description: description.into(),
        }
    }

    /// Titled failure message.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: Some(title.into()),
            description: description.into(),
        }
    }

    /// The message emitted after an acknowledged delete.
    pub fn delete_succeeded() -> Self {
        Self::info(DELETE_SUCCEEDED_DESCRIPTION)
    }
}
