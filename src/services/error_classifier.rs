//! Mapping from a rejected mutation to what the user is told.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::errors::ApiError;
use crate::domain::models::ErrorPayload;

/// Code the service returns when the target section no longer exists.
pub const NOT_FOUND_HOUSE_SECTION: &str = "NOT_FOUND_HOUSE_SECTION";

/// User-facing outcome of a failed mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ClassifiedError {
    /// Known condition; the service's message can be shown as-is
    Recognized(String),
    /// Anything else; the user gets a generic message
    Unrecognized,
}

/// Closed table of error codes whose messages are shown verbatim.
///
/// Only the `code` field is consulted; message text never affects the
/// outcome. Extend with [`with_code`](Self::with_code).
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    recognized: BTreeSet<String>,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::empty().with_code(NOT_FOUND_HOUSE_SECTION)
    }
}

impl ErrorClassifier {
    /// Classifier that recognizes nothing.
    pub const fn empty() -> Self {
        Self {
            recognized: BTreeSet::new(),
        }
    }

    /// Add a recognized code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.recognized.insert(code.into());
        self
    }

    /// Classify a structured error payload.
    pub fn classify(&self, payload: &ErrorPayload) -> ClassifiedError {
        match payload.code.as_deref() {
            Some(code) if self.recognized.contains(code) => {
                ClassifiedError::Recognized(payload.message.clone())
            }
            _ => ClassifiedError::Unrecognized,
        }
    }

    /// Classify a transport error; anything without a payload is unrecognized.
    pub fn classify_error(&self, err: &ApiError) -> ClassifiedError {
        err.payload()
            .map_or(ClassifiedError::Unrecognized, |payload| self.classify(payload))
    }
}
