//! Service layer: shared view state, background polling, and the
//! delete-then-converge workflow.

pub mod convergence_waiter;
pub mod error_classifier;
pub mod mutation_coordinator;
pub mod polling_scheduler;
pub mod section_store;
pub mod sections_view;

pub use convergence_waiter::{ConvergenceOutcome, ConvergenceWaiter};
pub use error_classifier::{ClassifiedError, ErrorClassifier, NOT_FOUND_HOUSE_SECTION};
pub use mutation_coordinator::{DeleteOutcome, MutationCoordinator, MutationState};
pub use polling_scheduler::{PollingHandle, PollingScheduler};
pub use section_store::SectionStore;
pub use sections_view::SectionsView;
