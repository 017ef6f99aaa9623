// Rust guideline compliant 2026-02-06

//! Error types for the Warta core library.

use crate::models::ArticleStatus;
use thiserror::Error;

/// Result type alias for Warta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Warta operations.
///
/// Workflow denials are not errors at this level: the validator returns a
/// [`crate::TransitionDecision`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid article data.
    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    /// Article not found.
    #[error("Article not found: {0}")]
    NotFound(String),

    /// Text that does not name one of the six article statuses.
    #[error("Unknown article status: {0}")]
    UnknownStatus(String),

    /// A stored article whose status is not one of the six article statuses.
    ///
    /// The record is left on disk untouched.
    #[error("Article {id} has unrecognized stored status: {status}")]
    UnrecognizedStoredStatus {
        /// Article ID.
        id: String,
        /// Status text as stored.
        status: String,
    },

    /// Text that does not name an actor role.
    #[error("Unknown actor role: {0}")]
    UnknownRole(String),

    /// A move into `rejected` was requested without a rejection reason.
    #[error("A rejection reason is required when rejecting an article")]
    RejectionReasonRequired,

    /// The stored article changed between the read and the guarded write.
    #[error(
        "Concurrent modification of {id}: expected {expected_status} (version {expected_version}), \
         found {found_status} (version {found_version})"
    )]
    Conflict {
        /// Article ID.
        id: String,
        /// Status the decision was computed against.
        expected_status: ArticleStatus,
        /// Version the decision was computed against.
        expected_version: u64,
        /// Status currently stored.
        found_status: ArticleStatus,
        /// Version currently stored.
        found_version: u64,
    },

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
