// src/domain/views.rs
//
// Denormalized read models assembled by the managers.
// Derived data only: never persisted, never mutated back.

use serde::{Deserialize, Serialize};

use super::favorite::Favorite;
use super::movie::Movie;
use super::review::Review;
use super::user::User;

/// One favorite of a user, with the movie details inlined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteMovieView {
    pub favorite_id: i64,
    pub movie_id: i64,
    pub movie_name: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
    pub website: String,
}

/// A user with their favorite movies, ordered by favorite id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub user_name: String,
    pub movies: Vec<FavoriteMovieView>,
}

/// A user with the plain movie records they favorited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMoviesView {
    pub id: i64,
    pub user_name: String,
    pub movies: Vec<Movie>,
}

/// A review with the reviewing user's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub review_text: String,
    pub user_name: String,
}

impl FavoriteMovieView {
    pub fn new(favorite: &Favorite, movie: &Movie) -> Self {
        Self {
            favorite_id: favorite.id,
            movie_id: movie.id,
            movie_name: movie.movie_name.clone(),
            director: movie.director.clone(),
            year: movie.year,
            rating: movie.rating,
            poster: movie.poster.clone(),
            website: movie.website.clone(),
        }
    }
}

impl UserView {
    pub fn new(user: User, movies: Vec<FavoriteMovieView>) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            movies,
        }
    }
}

impl ReviewView {
    pub fn new(review: Review, user_name: String) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            movie_id: review.movie_id,
            rating: review.rating,
            review_text: review.review_text,
            user_name,
        }
    }
}
