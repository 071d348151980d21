use chrono::{DateTime, Utc};
use serde::Serialize;

use super::section::Collection;

/// What a sections view currently displays.
///
/// Every writer replaces the whole value; the last replacement wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// No read has completed yet.
    #[default]
    Loading,

    /// The latest read succeeded.
    Ready {
        /// Sections returned by the read
        collection: Collection,
        /// When the read completed
        fetched_at: DateTime<Utc>,
    },

    /// The latest read failed.
    Failed {
        /// Display form of the read error
        error: String,
        /// Last good collection, kept so the view and the waiter still see it
        stale: Option<Collection>,
    },
}

impl ViewState {
    /// Fresh state from a successful read.
    pub fn ready(collection: Collection) -> Self {
        Self::Ready {
            collection,
            fetched_at: Utc::now(),
        }
    }

    /// State after a failed read, keeping whatever collection `previous` held.
    pub fn failed(error: impl Into<String>, previous: &Self) -> Self {
        Self::Failed {
            error: error.into(),
            stale: previous.collection().cloned(),
        }
    }

    /// The collection currently on display, fresh or stale.
    pub fn collection(&self) -> Option<&Collection> {
        match self {
            Self::Loading => None,
            Self::Ready { collection, .. } => Some(collection),
            Self::Failed { stale, .. } => stale.as_ref(),
        }
    }

    /// Observed section count; `None` until something has been read.
    pub fn observed_len(&self) -> Option<usize> {
        self.collection().map(Collection::len)
    }

    /// True while the last read failed.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
