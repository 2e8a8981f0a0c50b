//! Sequential HTTP reachability probe.

use crate::error::ProbeError;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;

/// Default timeout per probe
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Probe configuration
#[derive(Debug, Clone, Copy)]
pub struct ProbeConfig {
    /// Timeout for the whole probe exchange
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// Create the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Set the probe timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Camera reachability prober
pub struct Prober {
    http: HttpClient,
    timeout: Duration,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober {
    /// Create a prober with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a prober with custom configuration
    #[must_use]
    pub fn with_config(config: ProbeConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            timeout: config.timeout,
        }
    }

    /// Probe one host with a plain `GET http://<host>`.
    ///
    /// `Ok(())` means the HTTP exchange completed; the status code is
    /// never consulted, so a camera answering 404 or 500 still counts as
    /// reachable. Any transport failure maps to a [`ProbeError`].
    pub async fn check(&self, host: &str) -> Result<(), ProbeError> {
        let url = format!("http://{host}");
        debug!(url = %url, "probing");

        match self.http.get(&url).send().await {
            Ok(_response) => Ok(()),
            Err(e) if e.is_timeout() => Err(ProbeError::Timeout(self.timeout)),
            Err(e) if e.is_connect() => Err(ProbeError::Connect(e.to_string())),
            Err(e) => Err(ProbeError::Transport(e.to_string())),
        }
    }
}
