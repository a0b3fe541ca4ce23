//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when reading from a storefront endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    Request(String),

    /// The URL could not be resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status, if the endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
