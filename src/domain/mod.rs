// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod favorite;
pub mod movie;
pub mod review;
pub mod user;
pub mod views;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// User Domain
pub use user::{validate_user_name, NewUser, User, UserPatch};

// Movie Domain
pub use movie::{validate_movie_input, Movie, MovieInput, MoviePatch, NewMovie};

// Favorite (join entity)
pub use favorite::{Favorite, FavoritePatch, NewFavorite};

// Review Domain
pub use review::{validate_review_input, NewReview, Review, ReviewInput, ReviewPatch};

// Read models (derived data)
pub use views::{FavoriteMovieView, ReviewView, UserMoviesView, UserView};

use crate::error::{AppError, AppResult};

/// Turn a list of validation messages into a result
pub fn ensure_valid(errors: Vec<String>) -> AppResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
