// Rust guideline compliant 2026-02-09

//! Error handling for Warta application services.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use warta_core::{Denial, Error as CoreError};

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for API and CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested article was not found.
    NotFound,
    /// The provided identifier matched multiple articles.
    AmbiguousId,
    /// The stored status is not a known status.
    UnrecognizedStatus,
    /// The requested move does not exist.
    NoSuchTransition,
    /// The move exists but the actor's role may not make it.
    RoleNotPermitted,
    /// A rejection was requested without a reason.
    RejectionReasonRequired,
    /// The article changed concurrently and retries ran out.
    Conflict,
    /// Input validation failed.
    ValidationError,
    /// IO failure while reading or writing repository data.
    IoError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
}

impl ErrorCode {
    /// Returns the HTTP status a caller-facing API should answer with.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::UnrecognizedStatus
            | ErrorCode::NoSuchTransition
            | ErrorCode::RoleNotPermitted => 403,
            ErrorCode::RejectionReasonRequired
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput
            | ErrorCode::AmbiguousId => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::Conflict => 409,
            ErrorCode::IoError
            | ErrorCode::RepoNotInitialized
            | ErrorCode::JsonError => 500,
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Warta repository not initialized at {path}. Run 'warta init' first.")]
    RepoNotInitialized {
        /// Path where `.warta` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The workflow refused the transition.
    #[error("Transition denied: {0}")]
    TransitionDenied(Denial),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<Denial> for AppError {
    fn from(denial: Denial) -> Self {
        AppError::TransitionDenied(denial)
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::TransitionDenied(denial) => match denial {
                Denial::UnrecognizedSource { .. } => ErrorCode::UnrecognizedStatus,
                Denial::NoSuchPath { .. } => ErrorCode::NoSuchTransition,
                Denial::RoleNotPermitted { .. } => ErrorCode::RoleNotPermitted,
            },
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::RejectionReasonRequired => ErrorCode::RejectionReasonRequired,
                CoreError::Conflict { .. } => ErrorCode::Conflict,
                CoreError::UnrecognizedStoredStatus { .. } => ErrorCode::UnrecognizedStatus,
                CoreError::UnknownStatus(_) | CoreError::UnknownRole(_) => ErrorCode::InvalidInput,
                CoreError::InvalidArticle(_) | CoreError::InvalidConfig(_) => {
                    ErrorCode::ValidationError
                }
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code().http_status()
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::TransitionDenied(denial) => serde_json::to_value(denial).ok(),
            AppError::InvalidInput(_) | AppError::Io(_) => None,
            AppError::Core(core) => match core {
                CoreError::AmbiguousId(partial, matches) => Some(serde_json::json!({
                    "partial": partial,
                    "matches": matches,
                })),
                CoreError::Conflict {
                    id,
                    found_status,
                    found_version,
                    ..
                } => Some(serde_json::json!({
                    "id": id,
                    "current_status": found_status,
                    "current_version": found_version,
                })),
                CoreError::UnrecognizedStoredStatus { id, status } => Some(serde_json::json!({
                    "id": id,
                    "status": status,
                })),
                _ => None,
            },
        }
    }
}
