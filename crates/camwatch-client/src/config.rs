//! Registry authentication configuration.

use camwatch_core::{CamwatchError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Static credential triple the registry expects on every request.
///
/// The registry authenticates devices by three fixed headers; there is no
/// token refresh or challenge flow.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Value of the `x-token` header
    pub token: String,
    /// Value of the `x-id` header (registry-side device document id)
    pub device_id: String,
    /// Value of the `x-unique-number` header
    pub unique_number: String,
}

impl Credentials {
    /// Create a credential set
    pub fn new(
        token: impl Into<String>,
        device_id: impl Into<String>,
        unique_number: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            device_id: device_id.into(),
            unique_number: unique_number.into(),
        }
    }

    /// Build the default header map sent with every registry call.
    ///
    /// `Content-Type: application/json` rides along on all requests,
    /// including the bodyless GET, matching what the registry expects.
    pub(crate) fn to_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("x-token", header_value(&self.token)?);
        headers.insert("x-id", header_value(&self.device_id)?);
        headers.insert("x-unique-number", header_value(&self.unique_number)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| CamwatchError::Config(format!("credential not header-safe: {value:?}")))
}
