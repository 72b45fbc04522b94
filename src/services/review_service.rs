// src/services/review_service.rs
//
// Review Service
//
// CRITICAL RULES:
// - At most one review per (user, movie) (store rule)
// - "Favorited before reviewed" is checked by the caller
// - Reviews disappear with their user (store cascade)

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{NewReview, Review, ReviewView};
use crate::error::{AppError, AppResult};
use crate::repositories::{ReviewRepository, UserRepository};

pub struct ReviewService {
    review_repo: Arc<ReviewRepository>,
    user_repo: Arc<UserRepository>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<ReviewRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            review_repo,
            user_repo,
        }
    }

    /// Every review with its author's name, in review-id order
    pub fn get_movie_reviews(&self) -> AppResult<Vec<ReviewView>> {
        let reviews = self.review_repo.get_all()?;
        self.with_user_names(reviews)
    }

    pub fn get_reviews_for_movie(&self, movie_id: i64) -> AppResult<Vec<ReviewView>> {
        let reviews = self
            .review_repo
            .get_all()?
            .into_iter()
            .filter(|review| review.movie_id == movie_id)
            .collect();
        self.with_user_names(reviews)
    }

    pub fn find_review(&self, user_id: i64, movie_id: i64) -> AppResult<Option<Review>> {
        Ok(self
            .review_repo
            .get_all()?
            .into_iter()
            .find(|review| review.user_id == user_id && review.movie_id == movie_id))
    }

    pub fn add_movie_review(&self, new_review: NewReview) -> AppResult<i64> {
        if !new_review.rating.is_finite() {
            return Err(AppError::validation("Invalid review data"));
        }

        let (user_id, movie_id) = (new_review.user_id, new_review.movie_id);
        let review_id = self.review_repo.add(&Review::from(new_review))?;
        log::info!(
            "User {} reviewed movie {} (review {})",
            user_id,
            movie_id,
            review_id
        );
        Ok(review_id)
    }

    fn with_user_names(&self, reviews: Vec<Review>) -> AppResult<Vec<ReviewView>> {
        let names: HashMap<i64, String> = self
            .user_repo
            .get_all()?
            .into_iter()
            .map(|user| (user.id, user.user_name))
            .collect();

        Ok(reviews
            .into_iter()
            .filter_map(|review| match names.get(&review.user_id) {
                Some(name) => Some(ReviewView::new(review, name.clone())),
                None => {
                    log::warn!("Review {} has no author, skipping", review.id);
                    None
                }
            })
            .collect())
    }
}
