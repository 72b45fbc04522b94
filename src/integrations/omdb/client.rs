// src/integrations/omdb/client.rs
//
// OMDb API Integration
//
// ARCHITECTURE:
// - One GET per lookup, keyed by title
// - Fixed timeout, no retry
// - Returns the raw OMDb payload; mapping to movie info is the
//   enrichment service's job
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches the store

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::config::OmdbConfig;
use crate::error::{AppError, AppResult};

/// OMDb title lookup payload. Every field is optional: OMDb omits fields
/// freely and answers unknown titles with `Response: "False"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title")]
    pub title: Option<String>,

    #[serde(rename = "Director")]
    pub director: Option<String>,

    /// "1997", or a range such as "2019–2021" for series
    #[serde(rename = "Year")]
    pub year: Option<String>,

    /// Decimal string or "N/A"
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,

    #[serde(rename = "Poster")]
    pub poster: Option<String>,

    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,

    #[serde(rename = "Response")]
    pub response: Option<String>,

    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbMovie {
    pub fn is_found(&self) -> bool {
        !matches!(self.response.as_deref(), Some(r) if r.eq_ignore_ascii_case("false"))
    }
}

/// External movie metadata source
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn fetch(&self, title: &str) -> AppResult<OmdbMovie>;
}

/// OMDb API Client
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::External(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn fetch(&self, title: &str) -> AppResult<OmdbMovie> {
        log::debug!("OMDb lookup for '{}'", title);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::External(format!("OMDb request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::External(format!(
                "OMDb returned status: {}",
                response.status()
            )));
        }

        let movie: OmdbMovie = response
            .json()
            .await
            .map_err(|e| AppError::External(format!("Failed to parse OMDb response: {}", e)))?;

        if !movie.is_found() {
            return Err(AppError::External(format!(
                "OMDb has no match for '{}': {}",
                title,
                movie.error.as_deref().unwrap_or("unknown error")
            )));
        }

        Ok(movie)
    }
}
