// src/repositories/movie_repository.rs

use rusqlite::types::Value;
use rusqlite::Row;

use super::record::{Patch, Record};
use super::Gateway;
use crate::domain::{Movie, MoviePatch};

pub type MovieRepository = dyn Gateway<Movie>;

impl Record for Movie {
    type Patch = MoviePatch;

    const TABLE: &'static str = "movies";
    const COLUMNS: &'static [&'static str] =
        &["movie_name", "director", "year", "rating", "poster", "website"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Movie {
            id: row.get("id")?,
            movie_name: row.get("movie_name")?,
            director: row.get("director")?,
            year: row.get("year")?,
            rating: row.get("rating")?,
            poster: row.get("poster")?,
            website: row.get("website")?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.movie_name.clone()),
            Value::Text(self.director.clone()),
            Value::Integer(i64::from(self.year)),
            Value::Real(self.rating),
            Value::Text(self.poster.clone()),
            Value::Text(self.website.clone()),
        ]
    }
}

impl Patch<Movie> for MoviePatch {
    fn id(&self) -> i64 {
        self.id
    }

    fn assignments(&self) -> Vec<(&'static str, Value)> {
        let mut assignments = Vec::new();
        if let Some(movie_name) = &self.movie_name {
            assignments.push(("movie_name", Value::Text(movie_name.clone())));
        }
        if let Some(director) = &self.director {
            assignments.push(("director", Value::Text(director.clone())));
        }
        if let Some(year) = self.year {
            assignments.push(("year", Value::Integer(i64::from(year))));
        }
        if let Some(rating) = self.rating {
            assignments.push(("rating", Value::Real(rating)));
        }
        if let Some(poster) = &self.poster {
            assignments.push(("poster", Value::Text(poster.clone())));
        }
        if let Some(website) = &self.website {
            assignments.push(("website", Value::Text(website.clone())));
        }
        assignments
    }

    fn merge_into(&self, movie: &mut Movie) {
        if let Some(movie_name) = &self.movie_name {
            movie.movie_name = movie_name.clone();
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(poster) = &self.poster {
            movie.poster = poster.clone();
        }
        if let Some(website) = &self.website {
            movie.website = website.clone();
        }
    }
}
