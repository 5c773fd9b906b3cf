//! `TmdbClient` - TMDB API client implementation.

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::instrument;
use url::Url;

use super::api::LocalMovieApi;
use super::error::TmdbError;
use super::types::{MovieListResponse, MovieRecord, TmdbErrorResponse};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Sort key sent in discovery mode. The value TMDB accepts is
/// `popularity.desc`, verified against the live API contract.
const DISCOVER_SORT_KEY: &str = "popularity.desc";

/// Environment variable holding the TMDB API bearer token.
pub const TOKEN_ENV: &str = "TMDB_API_TOKEN";

/// TMDB API client.
///
/// Immutable once built: base URL, bearer token, and the underlying HTTP
/// client are fixed at construction. Each call issues exactly one
/// outbound request; there is no caching, retrying, or rate limiting.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError::Configuration` if:
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient, TmdbError> {
        let api_token = self
            .api_token
            .ok_or_else(|| TmdbError::Configuration(String::from("api_token is required")))?;
        let user_agent = self
            .user_agent
            .ok_or_else(|| TmdbError::Configuration(String::from("user_agent is required")))?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| TmdbError::Configuration(format!("invalid default base URL: {e}")))?
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .default_headers(default_headers)
            .gzip(true)
            .build()
            .map_err(|e| TmdbError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Builds a client from the `TMDB_API_TOKEN` environment variable.
    ///
    /// The variable is read once, at construction time. A missing token is
    /// a configuration error raised before any request can be attempted.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError::Configuration` if `TMDB_API_TOKEN` is not set
    /// or the client fails to build.
    pub fn from_env(user_agent: impl Into<String>) -> Result<Self, TmdbError> {
        let api_token = std::env::var(TOKEN_ENV).map_err(|_| {
            TmdbError::Configuration(format!("{TOKEN_ENV} environment variable is required"))
        })?;

        Self::builder()
            .api_token(api_token)
            .user_agent(user_agent)
            .build()
    }

    /// Sends a GET request with Bearer auth and decodes the JSON body.
    ///
    /// The bearer token is attached at request-build time, so the token
    /// captured by the builder is always the one on the wire.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TmdbError::Configuration(format!("failed to join URL path {path}: {e}")))?;

        let request = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .query(query)
            .build()?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TmdbErrorResponse>(&body).map_or_else(
                |_| String::from(status.canonical_reason().unwrap_or("unknown status")),
                |error_response| error_response.status_message,
            );
            return Err(TmdbError::RequestFailed { status, message });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

impl LocalMovieApi for TmdbClient {
    #[instrument(skip_all)]
    async fn search(&self, query: Option<&str>) -> Result<Vec<MovieRecord>, TmdbError> {
        let response: MovieListResponse = match query {
            Some(q) if !q.is_empty() => self.get_json("search/movie", &[("query", q)]).await?,
            _ => {
                self.get_json("discover/movie", &[("sort_by", DISCOVER_SORT_KEY)])
                    .await?
            }
        };

        Ok(response.results)
    }
}
