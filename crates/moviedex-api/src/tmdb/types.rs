//! TMDB API response types.

use serde::Deserialize;
use serde_json::Value;

/// Response envelope shared by `search/movie` and `discover/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Result records. A body without this field fails to decode.
    pub results: Vec<MovieRecord>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single movie record, kept as raw JSON.
///
/// The upstream shape is not interpreted here beyond membership in the
/// `results` array. The accessors below peek into the JSON and return
/// `None` when a field is absent or has an unexpected type; a typed
/// decoding layer can be added on top without touching the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MovieRecord(Value);

impl MovieRecord {
    /// TMDB movie ID.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// Localized title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Release date (`YYYY-MM-DD`).
    #[must_use]
    pub fn release_date(&self) -> Option<&str> {
        self.0.get("release_date").and_then(Value::as_str)
    }

    /// Vote average (0.0 - 10.0).
    #[must_use]
    pub fn vote_average(&self) -> Option<f64> {
        self.0.get("vote_average").and_then(Value::as_f64)
    }

    /// Full raw JSON value.
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.0
    }
}

/// Error body returned by TMDB for non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB-internal status code (not the HTTP status).
    pub status_code: u32,
    /// Human-readable error message.
    pub status_message: String,
    /// Always `false` on errors.
    #[serde(default)]
    pub success: bool,
}
