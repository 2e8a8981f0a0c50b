//! HTTP reachability probing for camera hosts.
//!
//! A probe is a single plain-HTTP GET against the host with a short
//! timeout. Only transport-level success or failure is observed; the
//! response itself is discarded.

mod error;
mod prober;

pub use error::ProbeError;
pub use prober::{ProbeConfig, Prober};
