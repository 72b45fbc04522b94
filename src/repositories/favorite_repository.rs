// src/repositories/favorite_repository.rs

use rusqlite::types::Value;
use rusqlite::Row;

use super::record::{Patch, Record};
use super::Gateway;
use crate::domain::{Favorite, FavoritePatch};

pub type FavoriteRepository = dyn Gateway<Favorite>;

impl Record for Favorite {
    type Patch = FavoritePatch;

    const TABLE: &'static str = "favorites";
    const COLUMNS: &'static [&'static str] = &["user_id", "movie_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Favorite {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            movie_id: row.get("movie_id")?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![Value::Integer(self.user_id), Value::Integer(self.movie_id)]
    }
}

impl Patch<Favorite> for FavoritePatch {
    fn id(&self) -> i64 {
        self.id
    }

    fn assignments(&self) -> Vec<(&'static str, Value)> {
        let mut assignments = Vec::new();
        if let Some(user_id) = self.user_id {
            assignments.push(("user_id", Value::Integer(user_id)));
        }
        if let Some(movie_id) = self.movie_id {
            assignments.push(("movie_id", Value::Integer(movie_id)));
        }
        assignments
    }

    fn merge_into(&self, favorite: &mut Favorite) {
        if let Some(user_id) = self.user_id {
            favorite.user_id = user_id;
        }
        if let Some(movie_id) = self.movie_id {
            favorite.movie_id = movie_id;
        }
    }
}
