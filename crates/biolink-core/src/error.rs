//! Error types shared by the HTTP sources and widgets.

use thiserror::Error;

/// Why a widget fetch failed. Both variants collapse to one visible error
/// state in the widget that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not complete (DNS, connect, timeout, body read)
    #[error("network failure: {0}")]
    Network(String),

    /// The request completed but the service reported failure
    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Upstream(format!("malformed response body: {}", err))
        } else if let Some(status) = err.status() {
            FetchError::Upstream(format!("HTTP {}", status))
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// An image reference that cannot be used. Handled per image by falling
/// back to a static asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset reference is empty")]
    Empty,

    #[error("invalid asset url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Failure reading or writing the key-value preference store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read preferences: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to save preferences: {0}")]
    Write(String),
}
