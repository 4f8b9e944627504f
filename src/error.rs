//! Error types for the storefront client

use thiserror::Error;

/// Failures talking to the seller API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The API answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON shape we expected.
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub(crate) fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Problems with the runtime configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
    #[error("invalid configuration value {0}: {1}")]
    Invalid(&'static str, String),
}
