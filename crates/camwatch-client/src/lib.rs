//! HTTP client for the camera registry API.
//!
//! This crate provides the [`RegistryClient`] used by the poller to fetch
//! the camera address list and to submit reachability results.

mod client;
mod config;
pub mod api;

pub use client::{RegistryClient, RegistryClientBuilder, DEFAULT_BASE_URL};
pub use config::Credentials;
pub use camwatch_core::{CamwatchError, Result};
