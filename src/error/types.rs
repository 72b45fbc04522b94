// src/error/types.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before touching the store. Messages are user-facing.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Resource not found")]
    NotFound,

    /// Uniqueness, referential or precondition violation.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External service error: {0}")]
    External(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }
}

pub const DUPLICATE_RECORD: &str = "Record already exists";
pub const RELATED_RECORD: &str = "Record is still referenced or references a missing record";
pub const CONSTRAINT_FAILED: &str = "Record violates a storage constraint";

/// Driver errors never leave the gateway as-is: constraint failures become
/// conflicts with a fixed message, everything else is a storage failure.
/// The driver text is logged, never returned.
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                log::warn!(
                    "Constraint violation: {}",
                    message.as_deref().unwrap_or("no driver message")
                );
                let reason = match failure.extended_code {
                    rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => DUPLICATE_RECORD,
                    rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => RELATED_RECORD,
                    _ => CONSTRAINT_FAILED,
                };
                AppError::Conflict(reason.to_string())
            }
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound,
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
