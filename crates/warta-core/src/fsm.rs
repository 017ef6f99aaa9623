// Rust guideline compliant 2026-02-06

//! Finite State Machine module for article status transitions.
//!
//! The validator answers one question: may `role` move an article from one
//! status to another under a given [`TransitionTable`]? It is a pure
//! function. Denials are values, not errors, and say which check failed:
//!
//! 1. Same source and destination: always admitted (saving without a status
//!    change).
//! 2. Source missing from the table: [`Denial::UnrecognizedSource`].
//! 3. No rule for the source leads to the destination: [`Denial::NoSuchPath`].
//! 4. The rule exists but excludes the role: [`Denial::RoleNotPermitted`].

use crate::models::{ActorRole, ArticleStatus};
use crate::table::{standard_table, TransitionTable};
use serde::Serialize;
use thiserror::Error;

/// Why a transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Denial {
    /// The stored status is not one the table knows about.
    #[error("source status not recognized: {status}")]
    UnrecognizedSource {
        /// The offending status text.
        status: String,
    },

    /// The move does not exist, whoever asks.
    #[error("no transition defined from {from} to {to}")]
    NoSuchPath {
        /// Source status.
        from: ArticleStatus,
        /// Requested destination, as given.
        to: String,
    },

    /// The move exists but this role may not make it.
    #[error("role {role} is not permitted to move an article from {from} to {to}")]
    RoleNotPermitted {
        /// Acting role.
        role: ActorRole,
        /// Source status.
        from: ArticleStatus,
        /// Destination status.
        to: ArticleStatus,
    },
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionDecision {
    /// The transition may proceed.
    Admitted,
    /// The transition is refused.
    Denied(Denial),
}

impl TransitionDecision {
    /// Returns true if the transition was admitted.
    #[must_use]
    pub fn is_admitted(&self) -> bool {
        matches!(self, TransitionDecision::Admitted)
    }

    /// Returns the denial, if any.
    #[must_use]
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            TransitionDecision::Admitted => None,
            TransitionDecision::Denied(denial) => Some(denial),
        }
    }

    /// Returns the operator-facing reason for a denial.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.denial().map(ToString::to_string)
    }

    /// Converts the decision into a `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the denial if the transition was refused.
    pub fn into_result(self) -> std::result::Result<(), Denial> {
        match self {
            TransitionDecision::Admitted => Ok(()),
            TransitionDecision::Denied(denial) => Err(denial),
        }
    }
}

/// Validates a transition against a table.
///
/// # Arguments
///
/// * `table` - Transition table to consult
/// * `from` - Current stored status
/// * `to` - Requested destination
/// * `role` - Role of the acting user
///
/// # Returns
///
/// [`TransitionDecision::Admitted`], or a denial naming the failed check.
pub fn validate(
    table: &TransitionTable,
    from: ArticleStatus,
    to: ArticleStatus,
    role: ActorRole,
) -> TransitionDecision {
    if from == to {
        return TransitionDecision::Admitted;
    }

    let Some(rules) = table.rules_for(from) else {
        return TransitionDecision::Denied(Denial::UnrecognizedSource {
            status: from.to_string(),
        });
    };

    let Some(rule) = rules.iter().find(|rule| rule.leads_to(to)) else {
        return TransitionDecision::Denied(Denial::NoSuchPath {
            from,
            to: to.to_string(),
        });
    };

    if !rule.permits(role) {
        return TransitionDecision::Denied(Denial::RoleNotPermitted { role, from, to });
    }

    TransitionDecision::Admitted
}

/// Validates a transition given as status text, as read from storage or a
/// request body.
///
/// An unparseable source is [`Denial::UnrecognizedSource`]; an unparseable
/// destination is [`Denial::NoSuchPath`], since no rule can lead to it.
pub fn validate_raw(
    table: &TransitionTable,
    from: &str,
    to: &str,
    role: ActorRole,
) -> TransitionDecision {
    let Ok(from_status) = from.parse::<ArticleStatus>() else {
        return TransitionDecision::Denied(Denial::UnrecognizedSource {
            status: from.to_string(),
        });
    };

    match to.parse::<ArticleStatus>() {
        Ok(to_status) => validate(table, from_status, to_status, role),
        Err(_) => TransitionDecision::Denied(Denial::NoSuchPath {
            from: from_status,
            to: to.to_string(),
        }),
    }
}

impl ArticleStatus {
    /// Checks a transition against the standard table.
    pub fn can_transition_to(&self, target: ArticleStatus, role: ActorRole) -> TransitionDecision {
        validate(standard_table(), *self, target, role)
    }

    /// Returns the destinations `role` may reach from this status under the
    /// standard table.
    pub fn valid_transitions(&self, role: ActorRole) -> Vec<ArticleStatus> {
        standard_table().destinations(*self, role)
    }
}
