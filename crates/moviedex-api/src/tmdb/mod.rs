//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 movie endpoints: free-text
//! search and popularity-ordered discovery.

mod api;
mod client;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TOKEN_ENV, TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::TmdbError;
#[allow(clippy::module_name_repetitions)]
pub use types::{MovieListResponse, MovieRecord, TmdbErrorResponse};
