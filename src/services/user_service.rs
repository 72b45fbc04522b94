// src/services/user_service.rs
//
// User Service - users and their favorite-movie views
//
// CRITICAL RULES:
// - Name content (letter-first, non-empty) is validated by the caller
// - Favorites and reviews disappear with the user, on every backing
// - Views are assembled here, never persisted

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Favorite, FavoriteMovieView, Movie, NewUser, User, UserPatch, UserView};
use crate::error::{AppError, AppResult};
use crate::repositories::{
    FavoriteRepository, MovieRepository, ReviewRepository, UserRepository,
};

pub struct UserService {
    user_repo: Arc<UserRepository>,
    favorite_repo: Arc<FavoriteRepository>,
    movie_repo: Arc<MovieRepository>,
    review_repo: Arc<ReviewRepository>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        favorite_repo: Arc<FavoriteRepository>,
        movie_repo: Arc<MovieRepository>,
        review_repo: Arc<ReviewRepository>,
    ) -> Self {
        Self {
            user_repo,
            favorite_repo,
            movie_repo,
            review_repo,
        }
    }

    pub fn get_all_users(&self) -> AppResult<Vec<UserView>> {
        let users = self.user_repo.get_all()?;
        let favorites = self.favorite_repo.get_all()?;
        let movies = self.movies_by_id()?;

        Ok(users
            .into_iter()
            .map(|user| {
                let movies = favorite_movies(&favorites, user.id, &movies);
                UserView::new(user, movies)
            })
            .collect())
    }

    pub fn get_user(&self, user_id: i64) -> AppResult<Option<UserView>> {
        let Some(user) = self.user_repo.get_by_id(user_id)? else {
            return Ok(None);
        };

        let favorites = self.favorite_repo.get_all()?;
        let movies = self.movies_by_id()?;
        let movies = favorite_movies(&favorites, user.id, &movies);

        Ok(Some(UserView::new(user, movies)))
    }

    /// A user's favorites, or `None` for an unknown user
    pub fn get_user_movies(&self, user_id: i64) -> AppResult<Option<Vec<FavoriteMovieView>>> {
        Ok(self.get_user(user_id)?.map(|user| user.movies))
    }

    /// One favorite of a user, looked up by movie id
    pub fn get_user_movie(
        &self,
        user_id: i64,
        movie_id: i64,
    ) -> AppResult<Option<FavoriteMovieView>> {
        Ok(self
            .get_user_movies(user_id)?
            .and_then(|movies| movies.into_iter().find(|m| m.movie_id == movie_id)))
    }

    pub fn add_user(&self, new_user: NewUser) -> AppResult<i64> {
        if new_user.user_name.trim().is_empty() {
            return Err(AppError::validation("Invalid user data"));
        }

        let user_id = self.user_repo.add(&User::from(new_user))?;
        log::info!("Created user {}", user_id);
        Ok(user_id)
    }

    pub fn update_user(&self, patch: UserPatch) -> AppResult<()> {
        self.user_repo.update(&patch)
    }

    /// Delete a user together with their reviews and favorites.
    ///
    /// The relational store cascades on its own; the flat-file store has no
    /// foreign keys, so dependents are removed here first. A later user that
    /// reuses the id starts with nothing.
    pub fn delete_user(&self, user_id: i64) -> AppResult<()> {
        if self.user_repo.get_by_id(user_id)?.is_none() {
            return Err(AppError::NotFound);
        }

        let reviews: Vec<i64> = self
            .review_repo
            .get_all()?
            .into_iter()
            .filter(|review| review.user_id == user_id)
            .map(|review| review.id)
            .collect();
        for review_id in &reviews {
            self.review_repo.delete(*review_id)?;
        }

        let favorites: Vec<i64> = self
            .favorite_repo
            .get_all()?
            .into_iter()
            .filter(|favorite| favorite.user_id == user_id)
            .map(|favorite| favorite.id)
            .collect();
        for favorite_id in &favorites {
            self.favorite_repo.delete(*favorite_id)?;
        }

        self.user_repo.delete(user_id)?;
        log::info!(
            "Deleted user {} ({} favorites, {} reviews)",
            user_id,
            favorites.len(),
            reviews.len()
        );
        Ok(())
    }

    pub fn exists(&self, user_id: i64) -> AppResult<bool> {
        Ok(self.user_repo.get_by_id(user_id)?.is_some())
    }

    fn movies_by_id(&self) -> AppResult<HashMap<i64, Movie>> {
        Ok(self
            .movie_repo
            .get_all()?
            .into_iter()
            .map(|movie| (movie.id, movie))
            .collect())
    }
}

/// Join a user's favorites with their movies, in favorite-id order.
/// Favorites pointing at a missing movie are skipped.
fn favorite_movies(
    favorites: &[Favorite],
    user_id: i64,
    movies: &HashMap<i64, Movie>,
) -> Vec<FavoriteMovieView> {
    favorites
        .iter()
        .filter(|favorite| favorite.user_id == user_id)
        .filter_map(|favorite| {
            movies
                .get(&favorite.movie_id)
                .map(|movie| FavoriteMovieView::new(favorite, movie))
        })
        .collect()
}
