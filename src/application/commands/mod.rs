// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between request handlers and managers
// - Commands accept JSON payloads, return views or confirmations
// - Commands check shape (validation) and preconditions (existence,
//   duplicates) before any write
// - Commands NEVER talk to gateways directly

pub mod favorite_commands;
pub mod movie_commands;
pub mod review_commands;
pub mod user_commands;

pub use favorite_commands::*;
pub use movie_commands::*;
pub use review_commands::*;
pub use user_commands::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error_handling::ErrorResponse;

pub type CommandResult<T> = Result<T, ErrorResponse>;

/// Decode a request payload; a malformed body is a validation failure
pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> CommandResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| ErrorResponse::validation(format!("Invalid request payload: {}", e)))
}

#[cfg(test)]
pub(crate) fn test_state() -> super::AppState {
    use crate::services::test_support::sqlite_repositories;
    use crate::services::EnrichmentService;

    super::AppState::new(&sqlite_repositories(), EnrichmentService::disabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ErrorType, UserDto};
    use serde_json::json;

    #[test]
    fn test_malformed_payload_is_validation_error() {
        let result: CommandResult<UserDto> = parse_payload(json!({"user_name": 42}));
        let error = result.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Validation);
        assert!(error.message.starts_with("Invalid request payload"));
    }
}
