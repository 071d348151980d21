//! HTTP adapter for the house section service

pub mod client;

pub use client::{HttpClientConfig, HttpSectionClient};
