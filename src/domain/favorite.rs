// src/domain/favorite.rs
//
// Favorite Entity
//
// Join record between a user and a movie they like.
// A (user_id, movie_id) pair appears at most once.
// Removing a favorite never removes the movie.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Referenced movie
    pub movie_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFavorite {
    pub user_id: i64,
    pub movie_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritePatch {
    pub id: i64,
    pub user_id: Option<i64>,
    pub movie_id: Option<i64>,
}

impl Favorite {
    pub fn new(user_id: i64, movie_id: i64) -> Self {
        Self {
            id: 0,
            user_id,
            movie_id,
        }
    }

    pub fn pair(&self) -> (i64, i64) {
        (self.user_id, self.movie_id)
    }
}

impl From<NewFavorite> for Favorite {
    fn from(new_favorite: NewFavorite) -> Self {
        Favorite::new(new_favorite.user_id, new_favorite.movie_id)
    }
}
