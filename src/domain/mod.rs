//! Domain layer for house section administration
//!
//! This module contains the models shared by every layer and the port traits
//! the services depend on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::ApiError;
