//! Shared view state for one house's sections.
//!
//! Both the polling task and the convergence waiter write here. Each write
//! replaces the whole [`ViewState`]; whichever read finishes last wins.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::errors::ApiError;
use crate::domain::models::ViewState;
use crate::domain::ports::SectionClient;

/// Owned state cell plus the read that feeds it.
pub struct SectionStore {
    client: Arc<dyn SectionClient>,
    house_id: String,
    state: watch::Sender<ViewState>,
}

impl SectionStore {
    /// Create a store in the `Loading` state. Nothing is read until
    /// [`refresh`](Self::refresh) is called.
    pub fn new(client: Arc<dyn SectionClient>, house_id: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            client,
            house_id: house_id.into(),
            state,
        }
    }

    /// House this store reads.
    pub fn house_id(&self) -> &str {
        &self.house_id
    }

    /// Client shared with mutations issued against this house.
    pub fn client(&self) -> &Arc<dyn SectionClient> {
        &self.client
    }

    /// Read the collection once and publish the result.
    ///
    /// On failure the previous collection is kept as stale data and the
    /// error is returned to the caller as well.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        match self.client.list(&self.house_id).await {
            Ok(collection) => {
                let count = collection.len();
                debug!(house_id = %self.house_id, count, "Collection refreshed");
                self.state.send_replace(ViewState::ready(collection));
                Ok(count)
            }
            Err(err) => {
                warn!(
                    house_id = %self.house_id,
                    error = %err,
                    transient = err.is_transient(),
                    "Collection read failed"
                );
                self.state.send_modify(|state| {
                    let next = ViewState::failed(err.to_string(), state);
                    *state = next;
                });
                Err(err)
            }
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Section count currently on display, `None` before the first read.
    pub fn observed_len(&self) -> Option<usize> {
        self.state.borrow().observed_len()
    }

    /// Receiver notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }
}
