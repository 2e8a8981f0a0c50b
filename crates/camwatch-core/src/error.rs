use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, CamwatchError>;

/// Errors that can occur when talking to the camera registry
#[derive(Error, Debug)]
pub enum CamwatchError {
    /// Authentication failed - the registry rejected the static headers
    #[error("authentication failed: registry rejected credentials")]
    Unauthorized,

    /// Registry returned a non-success response
    #[error("registry error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the registry
        message: String,
    },

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl CamwatchError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if the registry answered at all
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
