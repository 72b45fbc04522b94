// src/lib.rs
// MovieFlix - users, movies, favorites and reviews
//
// Architecture:
// - Domain-centric: entities, inputs and validation live in domain
// - Generic gateway: one CRUD contract, SQLite or flat-file backing
// - Explicit wiring: managers are built once and passed around in AppState
// - Application Layer: request boundary (commands, DTOs, error responses)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_movie_input,
    validate_review_input,
    validate_user_name,
    // Favorite
    Favorite,
    FavoriteMovieView,
    // Movie
    Movie,
    MovieInput,
    MoviePatch,
    NewFavorite,
    NewMovie,
    NewReview,
    NewUser,
    // Review
    Review,
    ReviewInput,
    ReviewPatch,
    ReviewView,
    // User
    User,
    UserMoviesView,
    UserPatch,
    UserView,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{AppConfig, OmdbConfig, StorageBackend};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{Gateway, JsonFileGateway, Repositories, SqliteGateway};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{EnrichmentService, FavoriteService, MovieService, ReviewService, UserService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, Confirmation, ErrorResponse, ErrorType};

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{MovieLookup, OmdbClient, OmdbMovie};
