//! Delete a section, wait for reads to reflect it, then tell the user.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::domain::errors::ApiError;
use crate::domain::models::notification::{CONTACT_ADMIN_DESCRIPTION, DELETE_FAILED_TITLE};
use crate::domain::models::{Ack, Notification};
use crate::domain::ports::Notifier;
use crate::services::convergence_waiter::{ConvergenceOutcome, ConvergenceWaiter};
use crate::services::error_classifier::{ClassifiedError, ErrorClassifier};
use crate::services::section_store::SectionStore;

/// Progress of a single delete invocation.
///
/// `Idle → MutationInFlight → Converging → Notified`, or
/// `Idle → MutationInFlight → Rejected → Notified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationState {
    /// Nothing sent yet
    Idle,
    /// Delete request awaiting a response
    MutationInFlight,
    /// Acknowledged; re-reading until the count changes
    Converging,
    /// Delete refused by the service or transport
    Rejected,
    /// The single notification has been emitted
    Notified,
}

impl MutationState {
    /// Whether `next` is a legal successor of `self`.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::MutationInFlight)
                | (Self::MutationInFlight, Self::Converging | Self::Rejected)
                | (Self::Converging | Self::Rejected, Self::Notified)
        )
    }
}

impl fmt::Display for MutationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::MutationInFlight => "mutation_in_flight",
            Self::Converging => "converging",
            Self::Rejected => "rejected",
            Self::Notified => "notified",
        };
        f.write_str(name)
    }
}

/// Result of one [`MutationCoordinator::remove`] call
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    /// Acknowledged, waited on, and reported as a success
    Deleted {
        /// Service acknowledgment
        ack: Ack,
        /// How the wait ended; exhaustion is still reported as success
        convergence: ConvergenceOutcome,
    },
    /// Refused; a failure notification was emitted
    Rejected {
        /// What the user was told
        classified: ClassifiedError,
        /// Underlying error
        error: ApiError,
    },
    /// Acknowledged but the owning view went away mid-wait; nothing was emitted
    Abandoned {
        /// Service acknowledgment
        ack: Ack,
        /// Reads performed before cancellation
        attempts: u32,
    },
}

impl DeleteOutcome {
    /// True when the service accepted the delete.
    pub const fn is_acknowledged(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Entry point for deleting a section from a mounted view.
///
/// The house is the one the store was created for. Each call sends the
/// delete exactly once and emits exactly one notification, unless the
/// cancellation token fires during the wait.
pub struct MutationCoordinator {
    store: Arc<SectionStore>,
    notifier: Arc<dyn Notifier>,
    waiter: ConvergenceWaiter,
    classifier: ErrorClassifier,
    cancel: CancellationToken,
}

impl MutationCoordinator {
    /// Create a coordinator with the default budget and classifier.
    ///
    /// The coordinator gets its own cancellation token, which nothing else
    /// holds: waits started from it always run to completion and notify.
    /// Use [`with_cancellation`](Self::with_cancellation) to tie waits to a
    /// view's lifetime.
    pub fn new(store: Arc<SectionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            waiter: ConvergenceWaiter::default(),
            classifier: ErrorClassifier::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the convergence waiter.
    #[must_use]
    pub const fn with_waiter(mut self, waiter: ConvergenceWaiter) -> Self {
        self.waiter = waiter;
        self
    }

    /// Replace the error classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Abort convergence waits when `cancel` fires.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Delete `section_id` from the store's house.
    pub async fn remove(&self, section_id: &str) -> DeleteOutcome {
        let invocation_id = Uuid::new_v4();
        let span = info_span!(
            "delete_section",
            %invocation_id,
            house_id = %self.store.house_id(),
            section_id = %section_id,
        );

        self.run(section_id).instrument(span).await
    }

    async fn run(&self, section_id: &str) -> DeleteOutcome {
        let mut state = MutationState::Idle;

        transition(&mut state, MutationState::MutationInFlight);
        let result = self
            .store
            .client()
            .remove(self.store.house_id(), section_id)
            .await;

        match result {
            Ok(ack) => {
                transition(&mut state, MutationState::Converging);

                let baseline = self.store.observed_len();
                let convergence = self.waiter.wait(&self.store, baseline, &self.cancel).await;

                match convergence {
                    ConvergenceOutcome::Cancelled { attempts } => {
                        info!(attempts, "View torn down during convergence wait, skipping notification");
                        DeleteOutcome::Abandoned { ack, attempts }
                    }
                    ConvergenceOutcome::Converged { attempts }
                    | ConvergenceOutcome::Exhausted { attempts } => {
                        info!(
                            attempts,
                            converged = matches!(convergence, ConvergenceOutcome::Converged { .. }),
                            "Delete acknowledged"
                        );
                        self.notifier.notify(Notification::delete_succeeded());
                        transition(&mut state, MutationState::Notified);
                        DeleteOutcome::Deleted { ack, convergence }
                    }
                }
            }
            Err(err) => {
                transition(&mut state, MutationState::Rejected);

                let classified = self.classifier.classify_error(&err);
                let notification = match &classified {
                    ClassifiedError::Recognized(message) => {
                        info!(error = %err, "Delete rejected with a recognized error");
                        Notification::destructive(DELETE_FAILED_TITLE, message.clone())
                    }
                    ClassifiedError::Unrecognized => {
                        error!(
                            error = %err,
                            payload = ?err.payload(),
                            "Delete failed with an unrecognized error"
                        );
                        Notification::destructive(DELETE_FAILED_TITLE, CONTACT_ADMIN_DESCRIPTION)
                    }
                };

                self.notifier.notify(notification);
                transition(&mut state, MutationState::Notified);
                DeleteOutcome::Rejected {
                    classified,
                    error: err,
                }
            }
        }
    }
}

fn transition(state: &mut MutationState, next: MutationState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal mutation transition {state} -> {next}"
    );
    debug!(from = %state, to = %next, "Mutation state transition");
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path_transitions() {
        assert!(MutationState::Idle.can_transition_to(MutationState::MutationInFlight));
        assert!(MutationState::MutationInFlight.can_transition_to(MutationState::Converging));
        assert!(MutationState::Converging.can_transition_to(MutationState::Notified));
    }

    #[test]
    fn test_rejection_path_transitions() {
        assert!(MutationState::MutationInFlight.can_transition_to(MutationState::Rejected));
        assert!(MutationState::Rejected.can_transition_to(MutationState::Notified));
    }

    #[test]
    fn test_no_reentry() {
        assert!(!MutationState::Notified.can_transition_to(MutationState::Idle));
        assert!(!MutationState::Notified.can_transition_to(MutationState::MutationInFlight));
        assert!(!MutationState::Converging.can_transition_to(MutationState::Rejected));
        assert!(!MutationState::Idle.can_transition_to(MutationState::Notified));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(MutationState::MutationInFlight.to_string(), "mutation_in_flight");
    }
}
