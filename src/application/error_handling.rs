// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → caller-facing responses
// - Provides consistent error format for the boundary
// - Never exposes storage details
// - Logs only what the lower layers have not logged already

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,

    /// Individual validation messages, in check order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Error categories for the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Uniqueness, reference or precondition failure (409)
    Conflict,

    /// Database/persistence error (500)
    Database,

    /// External service error (502)
    ExternalService,

    /// File system error (500)
    FileSystem,

    /// Misconfiguration (500)
    Configuration,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorType::Validation => 400,
            ErrorType::NotFound => 404,
            ErrorType::Conflict => 409,
            ErrorType::ExternalService => 502,
            ErrorType::Database
            | ErrorType::FileSystem
            | ErrorType::Configuration
            | ErrorType::Internal => 500,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
            errors: Vec::new(),
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Validation(errors) => {
                let mut response = Self::new(ErrorType::Validation, errors.join("; "), None);
                response.errors = errors;
                response
            }

            AppError::Conflict(reason) => Self::new(ErrorType::Conflict, reason, None),

            // Gateways log storage, pool and decode failures where they happen
            AppError::Storage(_) => Self::new(
                ErrorType::Database,
                "Database operation failed",
                Some("Check logs for details".to_string()),
            ),

            AppError::Pool(_) => {
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(_) => {
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::External(reason) => {
                Self::new(ErrorType::ExternalService, "External service error", Some(reason))
            }

            AppError::Config(reason) => {
                log::error!("Configuration error: {}", reason);
                Self::new(ErrorType::Configuration, "Invalid configuration", Some(reason))
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        let mut response = Self::new(ErrorType::Validation, message.clone(), None);
        response.errors = vec![message];
        response
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }

    /// Create conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Conflict, message, None)
    }

    pub fn status_code(&self) -> u16 {
        self.error_type.status_code()
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}
