use std::time::Duration;
use thiserror::Error;

/// Transport-level probe failures.
///
/// Every variant means "unreachable"; the distinction only feeds logging.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// No HTTP response arrived within the probe timeout
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// TCP connection could not be established
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport failure (DNS, TLS, malformed address, ...)
    #[error("transport error: {0}")]
    Transport(String),
}
