//! API Error Types
//!
//! Failures a view can end in. The `Display` text of each variant is exactly
//! what the error panel shows.

use thiserror::Error;

/// Fetch error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The backend answered outside 2xx
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The body was not JSON, or its records could not be decoded
    #[error("{0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
