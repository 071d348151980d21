//! Background refresh of a mounted sections view.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::models::POLL_INTERVAL;
use crate::services::section_store::SectionStore;

/// Re-reads a [`SectionStore`] on a fixed cadence.
///
/// The first read happens one full period after [`start`](Self::start); the
/// owning view performs its own read on mount.
#[derive(Debug, Clone, Copy)]
pub struct PollingScheduler {
    interval: Duration,
}

impl Default for PollingScheduler {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

impl PollingScheduler {
    /// Create a scheduler with a custom period.
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Polling period.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the polling task.
    ///
    /// The returned handle owns the timer: stopping or dropping it releases
    /// the timer, and no read is started after that. A failed read is logged
    /// and recorded in the store; the loop keeps ticking.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, store: Arc<SectionStore>) -> PollingHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let period = self.interval;

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let task = tokio::spawn(async move {
            info!(
                house_id = %store.house_id(),
                interval_ms = period.as_millis() as u64,
                "Started polling house sections"
            );

            let mut tick: u64 = 0;
            loop {
                tokio::select! {
                    biased;

                    () = cancelled.cancelled() => break,

                    _ = ticker.tick() => {
                        tick += 1;
                        debug!(house_id = %store.house_id(), tick, "Polling tick");

                        // A read still in flight at teardown is abandoned
                        tokio::select! {
                            biased;
                            () = cancelled.cancelled() => break,
                            result = store.refresh() => {
                                if let Err(err) = result {
                                    warn!(
                                        house_id = %store.house_id(),
                                        tick,
                                        error = %err,
                                        "Polling read failed, will retry on next tick"
                                    );
                                }
                            }
                        }
                    }
                }
            }

            info!(house_id = %store.house_id(), ticks = tick, "Polling stopped");
        });

        PollingHandle {
            token,
            task: Some(task),
        }
    }
}

/// Ownership of a running polling task.
///
/// Dropping the handle cancels the task; [`stop`](Self::stop) additionally
/// waits for it to finish.
pub struct PollingHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollingHandle {
    /// Cancel the polling task and wait for it to exit.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                if err.is_panic() {
                    warn!(error = %err, "Polling task panicked");
                }
            }
        }
    }

    /// True until the handle is stopped or the task has exited on its own.
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
