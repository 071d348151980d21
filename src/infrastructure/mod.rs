//! Infrastructure layer module
//!
//! This module contains the adapters and external integrations:
//! - HTTP client for the section service
//! - Configuration management
//! - Logging infrastructure
//! - Terminal notifications
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod http;
pub mod logging;
pub mod notify;
