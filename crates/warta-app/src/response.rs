// Rust guideline compliant 2026-02-09

//! Response envelopes for caller-facing output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope: `{ code, message, details? }`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }

    /// HTTP status class a web front end should answer with.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warta_core::{ActorRole, ArticleStatus, Denial};

    #[test]
    fn test_denial_envelope_carries_reason() {
        let error = AppError::from(Denial::RoleNotPermitted {
            from: ArticleStatus::PendingReview,
            to: ArticleStatus::Published,
            role: ActorRole::Writer,
        });
        let envelope = ErrorEnvelope::from_error(&error);
        assert_eq!(envelope.http_status(), 403);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], "role_not_permitted");
        assert_eq!(json["details"]["kind"], "role_not_permitted");
        assert_eq!(json["details"]["role"], "WRITER");
    }

    #[test]
    fn test_envelope_omits_empty_details() {
        let envelope = ErrorEnvelope::from_error(&AppError::InvalidInput("bad".to_string()));
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["message"], "Invalid input: bad");
    }

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(SuccessEnvelope::new(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok", "result": 42 }));
    }
}
