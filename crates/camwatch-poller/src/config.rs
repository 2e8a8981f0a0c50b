//! Poller configuration.

use camwatch_client::{Credentials, DEFAULT_BASE_URL};
use std::time::Duration;

// Static device identity issued by the registry.
const DEVICE_TOKEN: &str = "33333333333";
const DEVICE_ID: &str = "5f9f1b9d6b9b9c001234abcd";
const DEVICE_UNIQUE_NUMBER: &str = "33333333333";

/// Everything the poller needs, fixed at process start.
///
/// There is no runtime mutation and no external override surface; the
/// defaults ARE the production values. Tests substitute their own.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Registry base URL
    pub base_url: String,

    /// Static registry credentials
    pub credentials: Credentials,

    /// Timeout for the camera list fetch
    pub list_timeout: Duration,

    /// Timeout per camera probe
    pub probe_timeout: Duration,

    /// Sleep between cycles
    pub poll_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::new(DEVICE_TOKEN, DEVICE_ID, DEVICE_UNIQUE_NUMBER),
            list_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(1),
            poll_interval: Duration::from_secs(3),
        }
    }
}
