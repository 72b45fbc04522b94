// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer is the boundary between a request handler and the managers
// - It parses payloads, validates them, checks preconditions
// - It translates between DTOs and domain inputs
// - Any HTTP framework can call the commands directly

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
