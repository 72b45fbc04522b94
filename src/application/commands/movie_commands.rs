// src/application/commands/movie_commands.rs
//
// Movie Command Handlers
//
// RULES:
// - Validate the form before any lookup or write
// - Enrichment runs only for movies not yet in the catalogue
// - The enriched name is checked again by the movie manager
// - Deletion of a referenced movie is refused by the movie manager

use serde_json::Value;

use super::{parse_payload, CommandResult};
use crate::application::{AppState, Confirmation, ErrorResponse, MovieDto};
use crate::domain::{ensure_valid, validate_movie_input, Movie, MovieInput, NewMovie};
use crate::services::movie_service::{ALREADY_FAVORITE, MOVIE_EXISTS};

/// List the catalogue
pub fn list_movies(state: &AppState) -> CommandResult<Vec<Movie>> {
    Ok(state.movie_service.get_movies()?)
}

/// Get a single movie by ID
pub fn get_movie(state: &AppState, movie_id: i64) -> CommandResult<Movie> {
    state
        .movie_service
        .get_movie(movie_id)?
        .ok_or_else(|| ErrorResponse::not_found("Movie"))
}

/// Add a movie by name, enriched from the metadata service
pub async fn create_movie(state: &AppState, payload: Value) -> CommandResult<Confirmation> {
    let movie_name = movie_name_from(payload)?;

    if state.movie_service.find_by_name(&movie_name)?.is_some() {
        return Err(ErrorResponse::conflict(MOVIE_EXISTS));
    }

    let info = state.enrichment_service.new_movie_info(&movie_name).await;
    let movie_id = state.movie_service.add_new_movie(info)?;

    Ok(Confirmation::created("Movie added successfully", movie_id))
}

/// Favorite a movie by name for a user, adding it to the catalogue when new
pub async fn add_movie_for_user(
    state: &AppState,
    user_id: i64,
    payload: Value,
) -> CommandResult<Confirmation> {
    let movie_name = movie_name_from(payload)?;

    if !state.user_service.exists(user_id)? {
        return Err(ErrorResponse::not_found("User"));
    }

    let info = match state.movie_service.find_by_name(&movie_name)? {
        Some(existing) => {
            if state
                .favorite_service
                .find_favorite(user_id, existing.id)?
                .is_some()
            {
                return Err(ErrorResponse::conflict(ALREADY_FAVORITE));
            }
            NewMovie::named(existing.movie_name)
        }
        None => state.enrichment_service.new_movie_info(&movie_name).await,
    };

    let favorite_id = state.movie_service.add_user_movie(user_id, info)?;

    Ok(Confirmation::created("Movie added to favorites", favorite_id))
}

/// Edit a movie's fields
pub fn update_movie(state: &AppState, movie_id: i64, payload: Value) -> CommandResult<Confirmation> {
    let dto: MovieDto = parse_payload(payload)?;
    let input = MovieInput::from(dto);
    ensure_valid(validate_movie_input(&input))?;

    if state.movie_service.get_movie(movie_id)?.is_none() {
        return Err(ErrorResponse::not_found("Movie"));
    }

    state.movie_service.update_movie(input.into_patch(movie_id))?;

    Ok(Confirmation::ok("Movie updated successfully"))
}

/// Remove a movie no favorite or review refers to
pub fn delete_movie(state: &AppState, movie_id: i64) -> CommandResult<Confirmation> {
    if state.movie_service.get_movie(movie_id)?.is_none() {
        return Err(ErrorResponse::not_found("Movie"));
    }

    state.movie_service.delete_movie(movie_id)?;

    Ok(Confirmation::ok("Movie deleted successfully"))
}

fn movie_name_from(payload: Value) -> CommandResult<String> {
    let dto: MovieDto = parse_payload(payload)?;
    let input = MovieInput::from(dto);
    ensure_valid(validate_movie_input(&input))?;
    Ok(input.movie_name.unwrap_or_default())
}
