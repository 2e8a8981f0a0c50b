//! Core types and errors for the camwatch registry poller.
//!
//! This crate provides the types shared between the registry client and the
//! poller binary:
//!
//! - **Types**: the camera IP list envelope and the per-camera status record
//! - **Errors**: registry call failures as [`CamwatchError`]

mod error;
pub mod types;

pub use error::{CamwatchError, Result};
pub use types::*;
