//! Mount/unmount lifetime of a house's sections view.

use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::domain::errors::ApiError;
use crate::domain::models::ViewState;
use crate::domain::ports::{Notifier, SectionClient};
use crate::services::mutation_coordinator::{DeleteOutcome, MutationCoordinator};
use crate::services::polling_scheduler::{PollingHandle, PollingScheduler};
use crate::services::section_store::SectionStore;

/// A mounted view of one house's sections.
///
/// Mounting reads once and starts background polling. Unmounting (or
/// dropping) stops polling and cancels any convergence wait started through
/// [`delete`](Self::delete) or [`coordinator`](Self::coordinator).
pub struct SectionsView {
    store: Arc<SectionStore>,
    coordinator: Arc<MutationCoordinator>,
    poller: Option<PollingHandle>,
    lifetime: CancellationToken,
}

impl SectionsView {
    /// Mount with the default polling cadence.
    pub async fn mount(
        client: Arc<dyn SectionClient>,
        house_id: impl Into<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::mount_with(client, house_id, notifier, PollingScheduler::default()).await
    }

    /// Mount with a custom scheduler.
    ///
    /// A failed initial read leaves the view in the `Failed` state; polling
    /// starts regardless.
    pub async fn mount_with(
        client: Arc<dyn SectionClient>,
        house_id: impl Into<String>,
        notifier: Arc<dyn Notifier>,
        scheduler: PollingScheduler,
    ) -> Self {
        let store = Arc::new(SectionStore::new(client, house_id));
        let lifetime = CancellationToken::new();
        let coordinator = Arc::new(
            MutationCoordinator::new(store.clone(), notifier)
                .with_cancellation(lifetime.child_token()),
        );

        info!(house_id = %store.house_id(), "Mounting sections view");
        // Read failures are recorded in the store and logged there
        let _ = store.refresh().await;
        let poller = scheduler.start(store.clone());

        Self {
            store,
            coordinator,
            poller: Some(poller),
            lifetime,
        }
    }

    /// House on display.
    pub fn house_id(&self) -> &str {
        self.store.house_id()
    }

    /// Current view state.
    pub fn state(&self) -> ViewState {
        self.store.state()
    }

    /// Receiver that wakes on every state replacement.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }

    /// Re-read on demand; offered to the user when a read has failed.
    pub async fn retry(&self) -> Result<usize, ApiError> {
        self.store.refresh().await
    }

    /// Delete a section and wait for the view to reflect it.
    pub async fn delete(&self, section_id: &str) -> DeleteOutcome {
        self.coordinator.remove(section_id).await
    }

    /// Shared coordinator, for deletes that run on their own task.
    pub fn coordinator(&self) -> Arc<MutationCoordinator> {
        self.coordinator.clone()
    }

    /// True while polling is active.
    pub fn is_mounted(&self) -> bool {
        self.poller.as_ref().is_some_and(PollingHandle::is_running)
    }

    /// Stop polling, cancel outstanding waits, and wait for the polling task
    /// to exit.
    pub async fn unmount(mut self) {
        info!(house_id = %self.store.house_id(), "Unmounting sections view");
        self.lifetime.cancel();
        if let Some(poller) = self.poller.take() {
            poller.stop().await;
        }
    }
}

impl Drop for SectionsView {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
