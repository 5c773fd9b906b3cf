//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::TmdbError;
use super::types::MovieRecord;

/// TMDB movie query trait.
///
/// Abstracts the single query operation for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches movies for an optional free-text query.
    ///
    /// A non-empty query selects the `search/movie` endpoint; an empty or
    /// absent query selects `discover/movie` ordered by descending
    /// popularity. Exactly one request is issued per call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the status is
    /// non-success, or the response body cannot be decoded.
    async fn search(&self, query: Option<&str>) -> Result<Vec<MovieRecord>, TmdbError>;
}
