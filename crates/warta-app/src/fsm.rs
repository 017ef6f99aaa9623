// Rust guideline compliant 2026-02-09

//! Transition checks from request text.

use crate::error::{AppError, Result};
use warta_core::{validate_raw, ActorRole, TransitionDecision, TransitionTable};

/// Parses an actor role from request text.
///
/// # Errors
///
/// Returns an error if the role is not ADMIN, WRITER or READER.
pub fn parse_role(value: &str) -> Result<ActorRole> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid role: {}", value)))
}

/// Checks a transition given as text, without touching any article.
///
/// Status text is passed through to the validator, so an unknown source
/// comes back as a denial rather than an input error. An unknown role is an
/// input error.
///
/// # Errors
///
/// Returns an error if the role cannot be parsed.
pub fn check_transition(
    table: &TransitionTable,
    from: &str,
    to: &str,
    role: &str,
) -> Result<TransitionDecision> {
    let role = parse_role(role)?;
    Ok(validate_raw(table, from, to, role))
}
