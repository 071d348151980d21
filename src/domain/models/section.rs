//! House sections and the collection snapshots the service returns for them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structural unit of a house.
///
/// Only `id` is interpreted; every other field the service sends is carried
/// through untouched in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier assigned by the service
    pub id: String,

    /// Remaining fields, kept opaque
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Section {
    /// Create a section with no extra attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Human-facing label, if the service sent a `name` field.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}

/// The sections of one house, as returned by a single list read.
///
/// Wire shape: `{ "houseSections": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Sections in service order
    #[serde(default)]
    pub house_sections: Vec<Section>,
}

impl Collection {
    /// Wrap a list of sections.
    pub fn new(house_sections: Vec<Section>) -> Self {
        Self { house_sections }
    }

    /// Number of sections; the only signal used for convergence.
    pub fn len(&self) -> usize {
        self.house_sections.len()
    }

    /// True when the house has no sections.
    pub fn is_empty(&self) -> bool {
        self.house_sections.is_empty()
    }

    /// Iterate the sections in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.house_sections.iter()
    }
}

/// Acknowledgment of an accepted mutation.
///
/// Says nothing about when the change becomes visible to reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {
    /// HTTP status the service answered with
    pub status: u16,
}

/// Structured error body returned by the service on a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Machine-readable error code, e.g. `NOT_FOUND_HOUSE_SECTION`
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable message, already localized by the service
    #[serde(default)]
    pub message: String,
}

impl ErrorPayload {
    /// Build a payload with a code.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}
