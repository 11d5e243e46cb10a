//! Error types for job-scout.
//!
//! This module defines the error types returned by configuration loading,
//! browser backends and the scrape pipeline. Field-level selector misses are
//! never errors; they resolve to defaults inside the extractor.

/// Error type for job-scout operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The run configuration or source file is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Every configured source was excluded (example entries or missing URLs).
    #[error("No usable sources configured (all entries are examples or lack a url)")]
    NoUsableSources,

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input or output could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Navigation did not finish within its bound.
    #[error("Navigation timeout of {timeout_ms} ms exceeded for {url}")]
    NavigationTimeout {
        /// Page that was being loaded.
        url: String,
        /// Bound that expired, in milliseconds.
        timeout_ms: u64,
    },

    /// A snapshot was requested from a context that has not loaded a page.
    #[error("Browsing context has no loaded page")]
    NotNavigated,

    /// The page answered with a non-success HTTP status.
    #[error("HTTP status {status} for {url}")]
    Http {
        /// Page that was requested.
        url: String,
        /// Status code returned.
        status: u16,
    },

    /// Transport-level failure (DNS, TLS, connection reset, client build).
    #[error("Network error: {0}")]
    Network(String),

    /// The Browserless service rejected the render request.
    #[error("Browserless API error (status {status}): {message}")]
    Browserless {
        /// Status code returned by the service.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// A URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

/// Result type alias for job-scout operations.
pub type Result<T> = std::result::Result<T, Error>;
