//! house-admin - House section administration client
//!
//! Lists and deletes the sections of a house against a REST service whose
//! reads are eventually consistent. A mounted view keeps itself fresh by
//! polling, and a delete is only reported once a re-read shows the change or
//! a bounded wait runs out.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, port traits, and errors
//! - **Service Layer** (`services`): Polling, convergence wait, delete workflow
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, config, logging, notifications
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use house_admin::infrastructure::http::{HttpClientConfig, HttpSectionClient};
//! use house_admin::infrastructure::notify::TerminalNotifier;
//! use house_admin::services::SectionsView;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(HttpSectionClient::with_config(HttpClientConfig::default())?);
//!     let view = SectionsView::mount(client, "house-1", Arc::new(TerminalNotifier::new(false))).await;
//!     view.delete("section-7").await;
//!     view.unmount().await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::ApiError;
pub use domain::models::{
    Ack, Collection, Config, ErrorPayload, Notification, RetryBudget, Section, Severity, ViewState,
};
pub use domain::ports::{Notifier, SectionClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    ClassifiedError, ConvergenceOutcome, ConvergenceWaiter, DeleteOutcome, ErrorClassifier,
    MutationCoordinator, PollingScheduler, SectionStore, SectionsView,
};
