//! # HTTP Service
//!
//! Fetches countries matching a search query from the REST Countries API.
//! One request per call, no retries.

use crate::widget::models::{Country, SearchQuery};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Fields requested from the API; everything else is left out of the payload
pub const COUNTRY_FIELDS: &str = "name,capital,population,flags,languages";

/// Failure of a single country search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status (404 included)
    #[error("{status}")]
    RequestFailed { status: u16 },
    /// The request never produced a response
    #[error("{0}")]
    Network(String),
    /// The body was not an array of country records
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::RequestFailed { status: 404 })
    }
}

/// Anything that can answer a country search
///
/// The controller is generic over this so it can run against a canned
/// source in tests and against [`CountryService`] in production.
pub trait CountrySource {
    fn search(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Country>, FetchError>>;
}

/// REST Countries client backed by reqwest
#[derive(Debug, Clone)]
pub struct CountryService {
    client: reqwest::Client,
    base_url: String,
}

impl CountryService {
    /// Create a service for the given base URL, e.g. `https://restcountries.com/v2`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = base_url.into();
        tracing::debug!("Creating CountryService for {base_url}");

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the name search for a query; the query is path-escaped
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/name/{}?fields={}",
            self.base_url,
            urlencoding::encode(query.as_str()),
            COUNTRY_FIELDS
        )
    }

    /// Execute one search request
    pub async fn fetch_countries(&self, query: &SearchQuery) -> Result<Vec<Country>, FetchError> {
        let url = self.search_url(query);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Country search transport failure: {e}");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!("Country search for '{query}' failed with status {status}");
            return Err(FetchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let countries: Vec<Country> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        tracing::debug!("Country search for '{query}' returned {} records", countries.len());

        Ok(countries)
    }
}

impl CountrySource for CountryService {
    fn search(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Country>, FetchError>> {
        async move { self.fetch_countries(&query).await }
    }
}
