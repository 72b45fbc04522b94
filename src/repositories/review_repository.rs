// src/repositories/review_repository.rs

use rusqlite::types::Value;
use rusqlite::Row;

use super::record::{Patch, Record};
use super::Gateway;
use crate::domain::{Review, ReviewPatch};

pub type ReviewRepository = dyn Gateway<Review>;

impl Record for Review {
    type Patch = ReviewPatch;

    const TABLE: &'static str = "reviews";
    const COLUMNS: &'static [&'static str] = &["user_id", "movie_id", "rating", "review_text"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Review {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            movie_id: row.get("movie_id")?,
            rating: row.get("rating")?,
            review_text: row.get("review_text")?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.user_id),
            Value::Integer(self.movie_id),
            Value::Real(self.rating),
            Value::Text(self.review_text.clone()),
        ]
    }
}

impl Patch<Review> for ReviewPatch {
    fn id(&self) -> i64 {
        self.id
    }

    fn assignments(&self) -> Vec<(&'static str, Value)> {
        let mut assignments = Vec::new();
        if let Some(rating) = self.rating {
            assignments.push(("rating", Value::Real(rating)));
        }
        if let Some(review_text) = &self.review_text {
            assignments.push(("review_text", Value::Text(review_text.clone())));
        }
        assignments
    }

    fn merge_into(&self, review: &mut Review) {
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(review_text) = &self.review_text {
            review.review_text = review_text.clone();
        }
    }
}
