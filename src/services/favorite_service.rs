// src/services/favorite_service.rs
//
// Favorite Service - the user/movie join
//
// CRITICAL RULES:
// - Favorites reference existing users and movies (store rule)
// - Removing a favorite never removes the movie
// - Raw adds: duplicate checks belong to the caller

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Favorite, Movie, NewFavorite, UserMoviesView};
use crate::error::AppResult;
use crate::repositories::{FavoriteRepository, MovieRepository, UserRepository};

pub struct FavoriteService {
    favorite_repo: Arc<FavoriteRepository>,
    user_repo: Arc<UserRepository>,
    movie_repo: Arc<MovieRepository>,
}

impl FavoriteService {
    pub fn new(
        favorite_repo: Arc<FavoriteRepository>,
        user_repo: Arc<UserRepository>,
        movie_repo: Arc<MovieRepository>,
    ) -> Self {
        Self {
            favorite_repo,
            user_repo,
            movie_repo,
        }
    }

    /// Every user with the movies they favorited, in favorite-id order
    pub fn get_all_users_movies(&self) -> AppResult<Vec<UserMoviesView>> {
        let users = self.user_repo.get_all()?;
        let favorites = self.favorite_repo.get_all()?;
        let movies: HashMap<i64, Movie> = self
            .movie_repo
            .get_all()?
            .into_iter()
            .map(|movie| (movie.id, movie))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let movies = favorites
                    .iter()
                    .filter(|favorite| favorite.user_id == user.id)
                    .filter_map(|favorite| movies.get(&favorite.movie_id).cloned())
                    .collect();

                UserMoviesView {
                    id: user.id,
                    user_name: user.user_name,
                    movies,
                }
            })
            .collect())
    }

    pub fn get_favorite(&self, favorite_id: i64) -> AppResult<Option<Favorite>> {
        self.favorite_repo.get_by_id(favorite_id)
    }

    pub fn find_favorite(&self, user_id: i64, movie_id: i64) -> AppResult<Option<Favorite>> {
        Ok(self
            .favorite_repo
            .get_all()?
            .into_iter()
            .find(|favorite| favorite.pair() == (user_id, movie_id)))
    }

    pub fn add_user_movie(&self, new_favorite: NewFavorite) -> AppResult<i64> {
        let favorite_id = self.favorite_repo.add(&Favorite::from(new_favorite))?;
        log::info!(
            "User {} favorited movie {} (favorite {})",
            new_favorite.user_id,
            new_favorite.movie_id,
            favorite_id
        );
        Ok(favorite_id)
    }

    pub fn delete_user_movie(&self, favorite_id: i64) -> AppResult<()> {
        self.favorite_repo.delete(favorite_id)?;
        log::info!("Removed favorite {}", favorite_id);
        Ok(())
    }
}
