//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces infrastructure adapters implement:
//! - SectionClient: list and delete calls against the section service
//! - Notifier: user-facing message sink
//!
//! Services depend on these traits only, so tests can drive them with
//! scripted fakes.

pub mod notifier;
pub mod section_client;

pub use notifier::Notifier;
pub use section_client::SectionClient;
