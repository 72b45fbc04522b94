// src/application/commands/review_commands.rs
//
// Review Command Handlers
//
// RULES:
// - A movie can be reviewed only after the user favorited it
// - One review per user and movie
// - Both are preconditions (409), never storage errors

use serde_json::Value;

use super::{parse_payload, CommandResult};
use crate::application::{AppState, Confirmation, ErrorResponse, ReviewDto};
use crate::domain::{ensure_valid, validate_review_input, NewReview, ReviewView};

/// Every review, with its author's name
pub fn list_reviews(state: &AppState) -> CommandResult<Vec<ReviewView>> {
    Ok(state.review_service.get_movie_reviews()?)
}

/// Reviews of one movie
pub fn list_movie_reviews(state: &AppState, movie_id: i64) -> CommandResult<Vec<ReviewView>> {
    if state.movie_service.get_movie(movie_id)?.is_none() {
        return Err(ErrorResponse::not_found("Movie"));
    }

    Ok(state.review_service.get_reviews_for_movie(movie_id)?)
}

/// Review a favorited movie
pub fn add_review(state: &AppState, payload: Value) -> CommandResult<Confirmation> {
    let dto: ReviewDto = parse_payload(payload)?;
    let user_id = dto
        .user_id
        .ok_or_else(|| ErrorResponse::validation("User id is required"))?;
    let movie_id = dto
        .movie_id
        .ok_or_else(|| ErrorResponse::validation("Movie id is required"))?;

    ensure_valid(validate_review_input(&dto.input()))?;
    let rating = dto
        .rating
        .as_deref()
        .and_then(|rating| rating.trim().parse::<f64>().ok())
        .ok_or_else(|| ErrorResponse::validation("Rating must be a number"))?;

    if !state.user_service.exists(user_id)? {
        return Err(ErrorResponse::not_found("User"));
    }
    if state.movie_service.get_movie(movie_id)?.is_none() {
        return Err(ErrorResponse::not_found("Movie"));
    }
    if state
        .favorite_service
        .find_favorite(user_id, movie_id)?
        .is_none()
    {
        return Err(ErrorResponse::conflict(
            "Cannot review this movie: it is not in the user's favorites",
        ));
    }
    if state.review_service.find_review(user_id, movie_id)?.is_some() {
        return Err(ErrorResponse::conflict(
            "Cannot review this movie: already reviewed",
        ));
    }

    let review_id = state.review_service.add_movie_review(NewReview {
        user_id,
        movie_id,
        rating,
        review_text: dto.review_text.unwrap_or_default(),
    })?;

    Ok(Confirmation::created("Review added successfully", review_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::{add_favorite, create_movie, create_user, test_state};
    use crate::application::ErrorType;
    use serde_json::json;

    async fn favorited() -> AppState {
        let state = test_state();
        create_user(&state, json!({"user_name": "Alice"})).unwrap();
        create_movie(&state, json!({"movie_name": "Heat"})).await.unwrap();
        add_favorite(&state, json!({"user_id": 1, "movie_id": 1})).unwrap();
        state
    }

    #[tokio::test]
    async fn test_add_and_list_review() {
        let state = favorited().await;

        let confirmation = add_review(
            &state,
            json!({"user_id": 1, "movie_id": 1, "rating": 9, "review_text": "Great heist"}),
        )
        .unwrap();
        assert_eq!(confirmation.status, 201);

        let reviews = list_movie_reviews(&state, 1).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].user_name, "Alice");
        assert_eq!(reviews[0].rating, 9.0);
        assert_eq!(list_reviews(&state).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rating_is_validated() {
        let state = favorited().await;

        let error = add_review(&state, json!({"user_id": 1, "movie_id": 1})).unwrap_err();
        assert_eq!(error.errors, vec!["Rating cannot be empty"]);

        let error =
            add_review(&state, json!({"user_id": 1, "movie_id": 1, "rating": "0.5"})).unwrap_err();
        assert_eq!(error.errors, vec!["Rating must be between 1.0 - 10.0"]);
    }

    #[tokio::test]
    async fn test_review_requires_favorite_and_is_unique() {
        let state = favorited().await;
        create_movie(&state, json!({"movie_name": "Alien"})).await.unwrap();

        let error =
            add_review(&state, json!({"user_id": 1, "movie_id": 2, "rating": "7"})).unwrap_err();
        assert_eq!(error.error_type, ErrorType::Conflict);
        assert!(error.message.starts_with("Cannot review this movie"));

        add_review(&state, json!({"user_id": 1, "movie_id": 1, "rating": "7"})).unwrap();
        let error =
            add_review(&state, json!({"user_id": 1, "movie_id": 1, "rating": "8"})).unwrap_err();
        assert_eq!(error.message, "Cannot review this movie: already reviewed");
    }

    #[tokio::test]
    async fn test_unknown_movie_reviews_not_found() {
        let state = favorited().await;
        assert_eq!(list_movie_reviews(&state, 5).unwrap_err().status_code(), 404);
    }
}
