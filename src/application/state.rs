// src/application/state.rs

use std::sync::Arc;

use crate::repositories::Repositories;
use crate::services::{
    EnrichmentService, FavoriteService, MovieService, ReviewService, UserService,
};

/// Application state handed to every command.
/// All fields are Arc-wrapped for thread-safe sharing across requests.
/// Built once at startup; there is no ambient global.
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub movie_service: Arc<MovieService>,
    pub favorite_service: Arc<FavoriteService>,
    pub review_service: Arc<ReviewService>,
    pub enrichment_service: Arc<EnrichmentService>,
}

impl AppState {
    /// Wire every manager over one set of gateways
    pub fn new(repos: &Repositories, enrichment_service: EnrichmentService) -> Self {
        Self {
            user_service: Arc::new(UserService::new(
                repos.users.clone(),
                repos.favorites.clone(),
                repos.movies.clone(),
                repos.reviews.clone(),
            )),
            movie_service: Arc::new(MovieService::new(
                repos.movies.clone(),
                repos.favorites.clone(),
                repos.reviews.clone(),
            )),
            favorite_service: Arc::new(FavoriteService::new(
                repos.favorites.clone(),
                repos.users.clone(),
                repos.movies.clone(),
            )),
            review_service: Arc::new(ReviewService::new(
                repos.reviews.clone(),
                repos.users.clone(),
            )),
            enrichment_service: Arc::new(enrichment_service),
        }
    }
}
