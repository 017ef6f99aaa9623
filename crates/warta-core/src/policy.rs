// Rust guideline compliant 2026-02-06

//! Status-change side-effect policy.
//!
//! Once a transition is admitted, the review metadata is recomputed by an
//! ordered list of independent stamp rules. Each rule has its own predicate
//! and is evaluated in declaration order:
//!
//! 1. `stamp_publication`: first arrival at `published` records the reviewer,
//!    review time and publication time.
//! 2. `stamp_rejection`: arrival at `rejected` records the reviewer, review
//!    time and rejection note.
//! 3. `clear_rejection_note`: leaving `rejected` for `draft` or
//!    `pending_review` drops the stale note.
//! 4. `honor_published_at_override`: a caller-chosen publication time is kept
//!    only while the article is not being published.
//!
//! Rules 1-3 only fire on a real status change. Preconditions (a rejection
//! reason when moving to `rejected`) are checked before any rule runs, and
//! the rules work on a copy, so a failed precondition leaves the input
//! untouched.

use crate::models::{ActorRole, ArticleStatus, ReviewStamps};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Resolves the status a request will actually target.
///
/// A writer asking to publish gets a review request instead; only an admin
/// request can land on `published`. Every other request is unchanged.
#[must_use]
pub fn resolve_effective_target(requested: ArticleStatus, role: ActorRole) -> ArticleStatus {
    match (role, requested) {
        (ActorRole::Writer, ArticleStatus::Published) => ArticleStatus::PendingReview,
        _ => requested,
    }
}

/// An admitted transition and the inputs the stamp rules need.
#[derive(Debug, Clone)]
pub struct StatusChange<'a> {
    /// Status before the transition.
    pub prior: ArticleStatus,
    /// Status after the transition (already escalation-resolved).
    pub final_status: ArticleStatus,
    /// Display name of the acting user.
    pub actor_name: &'a str,
    /// Rejection reason supplied by the caller.
    pub rejection_reason: Option<&'a str>,
    /// Caller-supplied publication time.
    pub published_at_override: Option<DateTime<Utc>>,
    /// Time of the transition.
    pub now: DateTime<Utc>,
}

impl<'a> StatusChange<'a> {
    /// Creates a change with no rejection reason and no override.
    pub fn new(
        prior: ArticleStatus,
        final_status: ArticleStatus,
        actor_name: &'a str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            prior,
            final_status,
            actor_name,
            rejection_reason: None,
            published_at_override: None,
            now,
        }
    }

    /// Sets the rejection reason.
    #[must_use]
    pub fn with_rejection_reason(mut self, reason: Option<&'a str>) -> Self {
        self.rejection_reason = reason;
        self
    }

    /// Sets the publication time override.
    #[must_use]
    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at_override = published_at;
        self
    }

    /// Returns true if the status actually changes.
    #[must_use]
    pub fn changes_status(&self) -> bool {
        self.prior != self.final_status
    }

    /// A whitespace-only reason counts as missing.
    fn has_reason(&self) -> bool {
        self.rejection_reason.is_some_and(|reason| !reason.trim().is_empty())
    }
}

/// Result of applying the stamp rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    /// The recomputed review metadata.
    pub stamps: ReviewStamps,
    /// Names of the rules that fired, in order.
    pub applied: Vec<&'static str>,
}

/// A named stamp rule with its own guard.
struct StampRule {
    name: &'static str,
    applies: fn(&StatusChange<'_>) -> bool,
    apply: fn(&mut ReviewStamps, &StatusChange<'_>),
}

const STAMP_RULES: &[StampRule] = &[
    StampRule {
        name: "stamp_publication",
        applies: publication_applies,
        apply: stamp_publication,
    },
    StampRule {
        name: "stamp_rejection",
        applies: rejection_applies,
        apply: stamp_rejection,
    },
    StampRule {
        name: "clear_rejection_note",
        applies: leaving_rejection_applies,
        apply: clear_rejection_note,
    },
    StampRule {
        name: "honor_published_at_override",
        applies: override_applies,
        apply: honor_published_at_override,
    },
];

fn publication_applies(change: &StatusChange<'_>) -> bool {
    change.changes_status()
        && change.final_status == ArticleStatus::Published
        && change.prior != ArticleStatus::Published
}

fn stamp_publication(stamps: &mut ReviewStamps, change: &StatusChange<'_>) {
    stamps.reviewed_by = Some(change.actor_name.to_string());
    stamps.reviewed_at = Some(change.now);
    stamps.published_at = Some(change.now);
}

fn rejection_applies(change: &StatusChange<'_>) -> bool {
    change.changes_status() && change.final_status == ArticleStatus::Rejected
}

fn stamp_rejection(stamps: &mut ReviewStamps, change: &StatusChange<'_>) {
    stamps.reviewed_by = Some(change.actor_name.to_string());
    stamps.reviewed_at = Some(change.now);
    stamps.rejection_note = change.rejection_reason.map(str::to_string);
}

fn leaving_rejection_applies(change: &StatusChange<'_>) -> bool {
    change.changes_status()
        && change.prior == ArticleStatus::Rejected
        && matches!(
            change.final_status,
            ArticleStatus::Draft | ArticleStatus::PendingReview
        )
}

fn clear_rejection_note(stamps: &mut ReviewStamps, _change: &StatusChange<'_>) {
    stamps.rejection_note = None;
}

fn override_applies(change: &StatusChange<'_>) -> bool {
    change.published_at_override.is_some() && change.final_status != ArticleStatus::Published
}

fn honor_published_at_override(stamps: &mut ReviewStamps, change: &StatusChange<'_>) {
    stamps.published_at = change.published_at_override;
}

/// Checks the inputs the stamp rules require.
///
/// # Errors
///
/// Returns [`Error::RejectionReasonRequired`] when moving into `rejected`
/// without a non-blank reason.
pub fn check_preconditions(change: &StatusChange<'_>) -> Result<()> {
    if rejection_applies(change) && !change.has_reason() {
        return Err(Error::RejectionReasonRequired);
    }
    Ok(())
}

/// Applies the stamp rules to a copy of `current`.
///
/// # Arguments
///
/// * `current` - Review metadata before the transition
/// * `change` - The admitted transition
///
/// # Returns
///
/// The new metadata and the names of the rules that fired.
///
/// # Errors
///
/// Returns [`Error::RejectionReasonRequired`] when moving into `rejected`
/// without a reason. Nothing is stamped in that case.
pub fn apply_side_effects(current: &ReviewStamps, change: &StatusChange<'_>) -> Result<StampOutcome> {
    check_preconditions(change)?;

    let mut stamps = current.clone();
    let mut applied = Vec::new();
    for rule in STAMP_RULES {
        if (rule.applies)(change) {
            (rule.apply)(&mut stamps, change);
            applied.push(rule.name);
        }
    }

    Ok(StampOutcome { stamps, applied })
}

/// Names of the stamp rules in evaluation order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    STAMP_RULES.iter().map(|rule| rule.name)
}
