// src/services/enrichment_service.rs
//
// Enrichment Service - best-effort movie metadata
//
// CRITICAL RULES:
// - Never fails: any lookup problem degrades to a name-only movie
// - Never touches the store
// - One lookup per call, no retry

use std::sync::Arc;

use crate::domain::NewMovie;
use crate::integrations::{MovieLookup, OmdbMovie};

/// OMDb's placeholder for missing values
const NOT_AVAILABLE: &str = "N/A";

pub struct EnrichmentService {
    lookup: Option<Arc<dyn MovieLookup>>,
    detail_base_url: String,
}

impl EnrichmentService {
    pub fn new(lookup: Arc<dyn MovieLookup>, detail_base_url: impl Into<String>) -> Self {
        Self {
            lookup: Some(lookup),
            detail_base_url: detail_base_url.into(),
        }
    }

    /// Every movie is created from its name only
    pub fn disabled() -> Self {
        Self {
            lookup: None,
            detail_base_url: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.lookup.is_some()
    }

    /// Build new movie info for `movie_name`, enriched when the lookup works
    pub async fn new_movie_info(&self, movie_name: &str) -> NewMovie {
        let Some(lookup) = &self.lookup else {
            return NewMovie::named(movie_name);
        };

        match lookup.fetch(movie_name).await {
            Ok(found) => self.format_movie_info(found, movie_name),
            Err(err) => {
                log::warn!(
                    "Metadata lookup for '{}' failed, storing name only: {}",
                    movie_name,
                    err
                );
                NewMovie::named(movie_name)
            }
        }
    }

    /// Map an OMDb payload onto movie info.
    ///
    /// Year keeps its first 4 characters ("2019–2021" => 2019). Unparseable
    /// years and ratings become 0.
    pub fn format_movie_info(&self, response: OmdbMovie, movie_name: &str) -> NewMovie {
        let movie_name = available(response.title).unwrap_or_else(|| movie_name.to_string());

        let year = response
            .year
            .map(|year| year.chars().take(4).collect::<String>())
            .and_then(|year| year.parse::<i32>().ok())
            .unwrap_or(0);

        let rating = response
            .imdb_rating
            .and_then(|rating| rating.trim().parse::<f64>().ok())
            .filter(|rating| rating.is_finite())
            .unwrap_or(0.0);

        let website = available(response.imdb_id)
            .map(|imdb_id| format!("{}{}", self.detail_base_url, imdb_id))
            .unwrap_or_default();

        NewMovie {
            movie_name,
            director: available(response.director).unwrap_or_default(),
            year,
            rating,
            poster: available(response.poster).unwrap_or_default(),
            website,
        }
    }
}

fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IMDB_BASE_URL;
    use crate::error::AppError;
    use crate::integrations::omdb::MockMovieLookup;

    fn titanic() -> OmdbMovie {
        OmdbMovie {
            title: Some("Titanic".to_string()),
            director: Some("James Cameron".to_string()),
            year: Some("1997".to_string()),
            imdb_rating: Some("7.9".to_string()),
            poster: Some("https://m.media-amazon.com/images/titanic.jpg".to_string()),
            imdb_id: Some("tt0120338".to_string()),
            response: Some("True".to_string()),
            error: None,
        }
    }

    #[tokio::test]
    async fn test_enriched_movie_info() {
        let mut lookup = MockMovieLookup::new();
        lookup
            .expect_fetch()
            .withf(|title| title == "titanic")
            .times(1)
            .returning(|_| Ok(titanic()));

        let service = EnrichmentService::new(Arc::new(lookup), IMDB_BASE_URL);
        let info = service.new_movie_info("titanic").await;

        assert_eq!(info.movie_name, "Titanic");
        assert_eq!(info.director, "James Cameron");
        assert_eq!(info.year, 1997);
        assert_eq!(info.rating, 7.9);
        assert_eq!(info.website, "https://www.imdb.com/title/tt0120338");
    }

    #[tokio::test]
    async fn test_lookup_failure_degrades_to_name_only() {
        let mut lookup = MockMovieLookup::new();
        lookup
            .expect_fetch()
            .returning(|_| Err(AppError::External("timed out".to_string())));

        let service = EnrichmentService::new(Arc::new(lookup), IMDB_BASE_URL);
        let info = service.new_movie_info("Titanic").await;

        assert_eq!(info, NewMovie::named("Titanic"));
    }

    #[tokio::test]
    async fn test_disabled_service_never_calls_lookup() {
        let service = EnrichmentService::disabled();
        assert!(!service.is_enabled());
        assert_eq!(service.new_movie_info("Titanic").await, NewMovie::named("Titanic"));
    }

    #[test]
    fn test_year_range_and_missing_rating() {
        let service = EnrichmentService::disabled();
        let response = OmdbMovie {
            title: Some("Severance".to_string()),
            year: Some("2019–2021".to_string()),
            imdb_rating: Some("N/A".to_string()),
            ..Default::default()
        };

        let info = service.format_movie_info(response, "severance");
        assert_eq!(info.year, 2019);
        assert_eq!(info.rating, 0.0);
        assert_eq!(info.director, "");
        assert_eq!(info.website, "");
    }

    #[test]
    fn test_missing_title_keeps_requested_name() {
        let service = EnrichmentService::disabled();
        let info = service.format_movie_info(OmdbMovie::default(), "Heat");
        assert_eq!(info, NewMovie::named("Heat"));
    }
}
