//! Typed errors for the TMDB client.

use thiserror::Error;

/// Errors returned by the TMDB client.
///
/// No variant is retried internally. A failed request is a total failure
/// of the call; recovery is the caller's decision.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// Client construction failed (missing token or user agent, invalid
    /// base URL). Fatal: no requests can be attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Upstream returned a non-success HTTP status.
    #[error("TMDB API error (HTTP {status}): {message}")]
    RequestFailed {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Upstream `status_message` when the error body parses,
        /// canonical status text otherwise.
        message: String,
    },

    /// Response body was not valid JSON or lacked the `results` field.
    #[error("failed to decode TMDB response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport-level failure (DNS, connect, read).
    #[error("TMDB request failed: {0}")]
    Network(#[from] reqwest::Error),
}
