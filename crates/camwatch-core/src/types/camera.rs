use serde::{Deserialize, Serialize};

/// Response envelope of the registry's `GET /cameras-ips` endpoint.
///
/// The registry wraps the address list in a `data` field. An envelope
/// without the field deserializes to an empty list rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CameraIpsResponse {
    /// Camera addresses, in registry order. Opaque strings: the poller
    /// never parses or validates them.
    #[serde(default)]
    pub data: Vec<String>,
}

/// Reachability of a single camera, as submitted to `PATCH /cameras`.
///
/// The wire field for reachability is named `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraStatus {
    /// The address exactly as received from the registry
    pub ip: String,

    /// Whether an HTTP exchange with the camera completed, regardless of
    /// the status code it answered with
    #[serde(rename = "status")]
    pub reachable: bool,
}

impl CameraStatus {
    /// Create a status record for one probed address
    #[must_use]
    pub const fn new(ip: String, reachable: bool) -> Self {
        Self { ip, reachable }
    }
}
