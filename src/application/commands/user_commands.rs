// src/application/commands/user_commands.rs
//
// User Command Handlers
//
// RULES:
// - Validate the name before any write
// - Unknown ids are NotFound before the gateway is asked

use serde_json::Value;

use super::{parse_payload, CommandResult};
use crate::application::{AppState, Confirmation, ErrorResponse, UserDto};
use crate::domain::{ensure_valid, validate_user_name, FavoriteMovieView, NewUser, UserPatch, UserView};

/// List all users with their favorites
pub fn list_users(state: &AppState) -> CommandResult<Vec<UserView>> {
    Ok(state.user_service.get_all_users()?)
}

/// Get a single user by ID
pub fn get_user(state: &AppState, user_id: i64) -> CommandResult<UserView> {
    state
        .user_service
        .get_user(user_id)?
        .ok_or_else(|| ErrorResponse::not_found("User"))
}

/// A user's favorite movies
pub fn get_user_movies(state: &AppState, user_id: i64) -> CommandResult<Vec<FavoriteMovieView>> {
    state
        .user_service
        .get_user_movies(user_id)?
        .ok_or_else(|| ErrorResponse::not_found("User"))
}

/// Create a new user
pub fn create_user(state: &AppState, payload: Value) -> CommandResult<Confirmation> {
    let user_name = user_name_from(payload)?;

    let user_id = state.user_service.add_user(NewUser { user_name })?;

    Ok(Confirmation::created("User added successfully", user_id))
}

/// Rename a user
pub fn update_user(state: &AppState, user_id: i64, payload: Value) -> CommandResult<Confirmation> {
    let user_name = user_name_from(payload)?;

    if !state.user_service.exists(user_id)? {
        return Err(ErrorResponse::not_found("User"));
    }

    state
        .user_service
        .update_user(UserPatch::rename(user_id, user_name))?;

    Ok(Confirmation::ok("User updated successfully"))
}

/// Delete a user together with their favorites and reviews
pub fn delete_user(state: &AppState, user_id: i64) -> CommandResult<Confirmation> {
    if !state.user_service.exists(user_id)? {
        return Err(ErrorResponse::not_found("User"));
    }

    state.user_service.delete_user(user_id)?;

    Ok(Confirmation::ok("User deleted successfully"))
}

/// A missing name is validated as an empty one
fn user_name_from(payload: Value) -> CommandResult<String> {
    let dto: UserDto = parse_payload(payload)?;
    let user_name = dto.user_name.unwrap_or_default();
    ensure_valid(validate_user_name(&user_name))?;
    Ok(user_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_state;
    use crate::application::ErrorType;
    use serde_json::json;

    #[test]
    fn test_create_and_get_user() {
        let state = test_state();
        let confirmation = create_user(&state, json!({"user_name": "Alice"})).unwrap();
        assert_eq!(confirmation.status, 201);
        assert_eq!(confirmation.id, Some(1));

        let user = get_user(&state, 1).unwrap();
        assert_eq!(user.user_name, "Alice");
    }

    #[test]
    fn test_create_user_rejects_bad_names() {
        let state = test_state();

        let error = create_user(&state, json!({})).unwrap_err();
        assert_eq!(error.errors, vec!["User name cannot be empty"]);

        let error = create_user(&state, json!({"user_name": "9lives"})).unwrap_err();
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.errors, vec!["User name must start with letter"]);

        assert!(list_users(&state).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let state = test_state();
        assert_eq!(get_user(&state, 3).unwrap_err().status_code(), 404);
        assert_eq!(get_user_movies(&state, 3).unwrap_err().status_code(), 404);
        assert_eq!(delete_user(&state, 3).unwrap_err().status_code(), 404);
        assert_eq!(
            update_user(&state, 3, json!({"user_name": "Bob"}))
                .unwrap_err()
                .status_code(),
            404
        );
    }

    #[test]
    fn test_update_and_delete_user() {
        let state = test_state();
        create_user(&state, json!({"user_name": "Alice"})).unwrap();

        let confirmation = update_user(&state, 1, json!({"user_name": "Alicia"})).unwrap();
        assert_eq!(confirmation.status, 200);
        assert_eq!(get_user(&state, 1).unwrap().user_name, "Alicia");

        delete_user(&state, 1).unwrap();
        assert!(list_users(&state).unwrap().is_empty());
    }
}
