//! Camera endpoints.

use crate::RegistryClient;
use camwatch_core::{CameraIpsResponse, CameraStatus, Result};

/// Camera API endpoints
pub struct CamerasApi<'a> {
    client: &'a RegistryClient,
}

impl<'a> CamerasApi<'a> {
    pub(crate) fn new(client: &'a RegistryClient) -> Self {
        Self { client }
    }

    /// Fetch the current camera address list.
    ///
    /// Returns the `data` array in registry order; an envelope without the
    /// field yields an empty list, not an error.
    pub async fn ips(&self) -> Result<Vec<String>> {
        let response: CameraIpsResponse = self.client.get("/cameras-ips").await?;
        Ok(response.data)
    }

    /// Submit a cycle's reachability results, one record per probed
    /// address, probe order preserved.
    pub async fn report(&self, records: &[CameraStatus]) -> Result<()> {
        self.client.patch("/cameras", records).await
    }
}
