//! CCTV reachability poller.
//!
//! Periodically asks the camera registry for the current list of camera
//! addresses, probes each one with a short plain-HTTP GET, and PATCHes the
//! aggregated reachability back to the registry. Runs in the foreground
//! until killed; every failure degrades to a logged warning and the next
//! cycle.

mod config;
mod poller;

pub use config::PollerConfig;
pub use poller::Poller;

use anyhow::Result;
use camwatch_client::RegistryClient;
use camwatch_probe::{ProbeConfig, Prober};
use tracing::info;

/// Run the poller against the production registry.
pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "camwatch_poller=info,camwatch_client=info,camwatch_probe=info".into()
            }),
        )
        .with_target(false)
        .init();

    let config = PollerConfig::default();

    let client = RegistryClient::builder(config.credentials.clone())
        .base_url(config.base_url.clone())
        .list_timeout(config.list_timeout)
        .build()?;
    let prober = Prober::with_config(ProbeConfig::new().timeout(config.probe_timeout));

    info!(
        registry = %config.base_url,
        interval = ?config.poll_interval,
        "starting camwatch poller"
    );

    Poller::new(client, prober, config.poll_interval).run().await;
    Ok(())
}
