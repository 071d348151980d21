//! Bounded wait for an acknowledged mutation to show up in list reads.

use serde::Serialize;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::models::RetryBudget;
use crate::services::section_store::SectionStore;

/// How a convergence wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConvergenceOutcome {
    /// The observed count moved away from the baseline
    Converged {
        /// Reads performed
        attempts: u32,
    },
    /// The budget ran out with the count unchanged
    Exhausted {
        /// Reads performed
        attempts: u32,
    },
    /// The cancellation token fired before the wait finished
    Cancelled {
        /// Reads performed
        attempts: u32,
    },
}

impl ConvergenceOutcome {
    /// Reads performed before the wait ended.
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Converged { attempts }
            | Self::Exhausted { attempts }
            | Self::Cancelled { attempts } => *attempts,
        }
    }

    /// True if the wait ran to an end on its own.
    pub const fn completed(&self) -> bool {
        !matches!(self, Self::Cancelled { .. })
    }
}

/// Re-reads a store until its count differs from a baseline.
///
/// A change in count is the only signal: the deleted id itself is never
/// checked, so an unrelated insert or delete also ends the wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvergenceWaiter {
    budget: RetryBudget,
}

impl ConvergenceWaiter {
    /// Create a waiter with the given budget.
    pub const fn new(budget: RetryBudget) -> Self {
        Self { budget }
    }

    /// Budget this waiter spends.
    pub const fn budget(&self) -> RetryBudget {
        self.budget
    }

    /// Wait for the observed count to leave `baseline`.
    ///
    /// Each attempt reads once. If the count still equals the baseline the
    /// waiter sleeps for the budget's delay before the next attempt, so
    /// convergence on attempt k costs k reads and k-1 delays, while an
    /// exhausted budget costs every read and every delay.
    ///
    /// `cancel` is checked before each read and each delay; a read failure
    /// counts as an attempt and leaves the stale count in place.
    pub async fn wait(
        &self,
        store: &SectionStore,
        baseline: Option<usize>,
        cancel: &CancellationToken,
    ) -> ConvergenceOutcome {
        let max_attempts = self.budget.max_attempts();
        let mut attempts = 0;

        loop {
            if store.observed_len() != baseline {
                return ConvergenceOutcome::Converged { attempts };
            }
            if attempts >= max_attempts {
                return ConvergenceOutcome::Exhausted { attempts };
            }

            let read = tokio::select! {
                biased;
                () = cancel.cancelled() => return ConvergenceOutcome::Cancelled { attempts },
                read = store.refresh() => read,
            };
            attempts += 1;

            let observed = store.observed_len();
            debug!(
                house_id = %store.house_id(),
                attempt = attempts,
                max_attempts,
                ?baseline,
                ?observed,
                read_ok = read.is_ok(),
                "Convergence attempt"
            );

            if observed != baseline {
                return ConvergenceOutcome::Converged { attempts };
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => return ConvergenceOutcome::Cancelled { attempts },
                () = sleep(self.budget.delay()) => {}
            }
        }
    }
}
