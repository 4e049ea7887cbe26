//! Error types for page fetching

use thiserror::Error;

/// Failure modes of the page cache
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a client or server error status
    #[error("HTTP {status} for: {url}")]
    Http {
        /// Status code returned by the server (4xx/5xx)
        status: u16,
        /// URL the request was issued for
        url: String,
    },

    /// The request failed at the transport level (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
