use serde::{Deserialize, Serialize};

/// A user's review of a movie they have favorited.
/// At most one review per (user_id, movie_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub review_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub review_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewPatch {
    pub id: i64,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
}

/// Untrusted review fields from a form or JSON payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub rating: Option<String>,
    pub review_text: Option<String>,
}

impl From<NewReview> for Review {
    fn from(new_review: NewReview) -> Self {
        Self {
            id: 0,
            user_id: new_review.user_id,
            movie_id: new_review.movie_id,
            rating: new_review.rating,
            review_text: new_review.review_text,
        }
    }
}
