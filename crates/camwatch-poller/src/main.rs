//! camwatch - CCTV reachability poller.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    camwatch_poller::run().await
}
