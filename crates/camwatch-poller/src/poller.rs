//! The fetch → probe → report cycle.

use camwatch_client::RegistryClient;
use camwatch_core::CameraStatus;
use camwatch_probe::Prober;
use chrono::Local;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives the registry poll loop.
///
/// Owns a registry client and a prober; holds no other state. Every cycle
/// recomputes everything from the registry's current answer.
pub struct Poller {
    client: RegistryClient,
    prober: Prober,
    poll_interval: Duration,
}

impl Poller {
    /// Create a poller from its collaborators
    #[must_use]
    pub const fn new(client: RegistryClient, prober: Prober, poll_interval: Duration) -> Self {
        Self {
            client,
            prober,
            poll_interval,
        }
    }

    /// Run one fetch → probe → report iteration.
    ///
    /// Returns the records submitted this cycle. An empty return means the
    /// registry yielded no addresses (or the fetch failed), in which case
    /// no report was sent. Probe and report failures are logged, never
    /// propagated: a cycle always completes.
    pub async fn cycle(&self) -> Vec<CameraStatus> {
        info!(at = %Local::now().format("%Y-%m-%d %H:%M:%S"), "running reachability check");

        let ips = match self.client.cameras().ips().await {
            Ok(ips) => ips,
            Err(e) => {
                warn!(error = %e, "failed to fetch camera list");
                Vec::new()
            }
        };

        if ips.is_empty() {
            warn!("no camera addresses in registry response");
            return Vec::new();
        }

        info!(count = ips.len(), ips = ?ips, "received camera list");

        let mut records = Vec::with_capacity(ips.len());
        for ip in ips {
            let reachable = match self.prober.check(&ip).await {
                Ok(()) => true,
                Err(e) => {
                    debug!(ip = %ip, error = %e, "camera unreachable");
                    false
                }
            };
            records.push(CameraStatus::new(ip, reachable));
        }

        info!(
            results = %serde_json::to_string(&records).unwrap_or_default(),
            "sending results"
        );

        match self.client.cameras().report(&records).await {
            Ok(()) => info!("results sent successfully"),
            Err(e) => warn!(error = %e, "failed to send results"),
        }

        records
    }

    /// Run cycles until the process is told to stop.
    ///
    /// Sleeps a fixed interval after each cycle, so a slow cycle stretches
    /// the period rather than overlapping the next one. Ctrl-C during the
    /// sleep breaks the loop.
    pub async fn run(&self) {
        loop {
            self.cycle().await;

            debug!(interval = ?self.poll_interval, "cycle complete, sleeping");
            tokio::select! {
                () = tokio::time::sleep(self.poll_interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("shutdown requested, stopping poller");
                    break;
                }
            }
        }
    }
}
