// src/application/commands/favorite_commands.rs
//
// Favorite Command Handlers

use serde_json::Value;

use super::{parse_payload, CommandResult};
use crate::application::{AppState, Confirmation, ErrorResponse, FavoriteDto};
use crate::domain::{NewFavorite, UserMoviesView};
use crate::services::movie_service::ALREADY_FAVORITE;

/// Every user with the movies they favorited
pub fn list_favorites(state: &AppState) -> CommandResult<Vec<UserMoviesView>> {
    Ok(state.favorite_service.get_all_users_movies()?)
}

/// Favorite an existing movie for an existing user
pub fn add_favorite(state: &AppState, payload: Value) -> CommandResult<Confirmation> {
    let dto: FavoriteDto = parse_payload(payload)?;
    let user_id = dto
        .user_id
        .ok_or_else(|| ErrorResponse::validation("User id is required"))?;
    let movie_id = dto
        .movie_id
        .ok_or_else(|| ErrorResponse::validation("Movie id is required"))?;

    if !state.user_service.exists(user_id)? {
        return Err(ErrorResponse::not_found("User"));
    }
    if state.movie_service.get_movie(movie_id)?.is_none() {
        return Err(ErrorResponse::not_found("Movie"));
    }
    if state
        .favorite_service
        .find_favorite(user_id, movie_id)?
        .is_some()
    {
        return Err(ErrorResponse::conflict(ALREADY_FAVORITE));
    }

    let favorite_id = state
        .favorite_service
        .add_user_movie(NewFavorite { user_id, movie_id })?;

    Ok(Confirmation::created("Movie added to favorites", favorite_id))
}

/// Unfavorite; the movie stays in the catalogue
pub fn delete_favorite(state: &AppState, favorite_id: i64) -> CommandResult<Confirmation> {
    if state.favorite_service.get_favorite(favorite_id)?.is_none() {
        return Err(ErrorResponse::not_found("Favorite"));
    }

    state.favorite_service.delete_user_movie(favorite_id)?;

    Ok(Confirmation::ok("Movie removed from favorites"))
}
