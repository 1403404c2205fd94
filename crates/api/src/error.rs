use thiserror::Error;

/// Errors raised while talking to the storefront backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{base}': {reason}")]
    InvalidBaseUrl { base: String, reason: String },

    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
