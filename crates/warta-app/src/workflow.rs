// Rust guideline compliant 2026-02-09

//! Article status-change handler.
//!
//! Runs the mandatory sequence for a status change request:
//!
//! 1. Re-read the article from the store.
//! 2. Resolve the effective target (writer publish requests become review
//!    requests).
//! 3. Validate `(stored status, effective target, role)`.
//! 4. Apply the stamp rules, failing before any mutation if a rejection
//!    reason is missing.
//! 5. Commit with compare-and-swap on the status and version read in step 1.
//!
//! A conflicting commit restarts from step 1 against the refreshed article,
//! up to the configured retry budget. Denials are never retried.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use warta_core::{
    apply_side_effects, resolve_effective_target, validate, validate_raw, ActorRole, Article,
    ArticleStatus, ArticleStore, Error as CoreError, StatusChange, TransitionTable,
};

/// The acting user, as resolved by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Display name, recorded as the reviewer.
    pub name: String,
    /// Permission class.
    pub role: ActorRole,
}

impl Actor {
    /// Creates an actor.
    pub fn new(name: impl Into<String>, role: ActorRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// A requested status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Status the caller asked for.
    pub requested: ArticleStatus,
    /// Rejection reason; required when the effective target is `rejected`.
    pub rejection_reason: Option<String>,
    /// Caller-chosen publication time, honored only when not publishing.
    pub published_at: Option<DateTime<Utc>>,
}

impl TransitionRequest {
    /// Creates a request for `requested` with no reason or override.
    pub fn to(requested: ArticleStatus) -> Self {
        Self {
            requested,
            rejection_reason: None,
            published_at: None,
        }
    }

    /// Sets the rejection reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Sets the publication time override.
    #[must_use]
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}

/// A fully computed status change, ready to commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionPlan {
    /// The article as it should be written.
    pub article: Article,
    /// Status the decision was computed against.
    pub prior: ArticleStatus,
    /// Status the caller asked for.
    pub requested: ArticleStatus,
    /// Status actually applied.
    pub effective: ArticleStatus,
    /// Stamp rules that fired.
    pub applied_rules: Vec<&'static str>,
}

impl TransitionPlan {
    /// Returns true if the writer escalation override rewrote the target.
    #[must_use]
    pub fn was_escalated(&self) -> bool {
        self.requested != self.effective
    }
}

/// Computes the new article for a request, without touching any store.
///
/// # Arguments
///
/// * `table` - Transition table to validate against
/// * `article` - Current stored article
/// * `request` - The requested change
/// * `actor` - The acting user
/// * `now` - Transition time
///
/// # Errors
///
/// Returns an error if:
/// - The validator denies the effective transition
/// - The target is `rejected` and no reason was given
pub fn plan_transition(
    table: &TransitionTable,
    article: &Article,
    request: &TransitionRequest,
    actor: &Actor,
    now: DateTime<Utc>,
) -> Result<TransitionPlan> {
    let prior = article.status;
    let effective = resolve_effective_target(request.requested, actor.role);

    if let Err(denial) = validate(table, prior, effective, actor.role).into_result() {
        debug!(
            article_id = %article.id,
            from = %prior,
            to = %effective,
            role = %actor.role,
            reason = %denial,
            "transition denied"
        );
        return Err(AppError::TransitionDenied(denial));
    }

    let change = StatusChange::new(prior, effective, &actor.name, now)
        .with_rejection_reason(request.rejection_reason.as_deref())
        .with_published_at(request.published_at);
    let outcome = apply_side_effects(&article.review, &change)?;

    let mut next = article.clone();
    next.status = effective;
    next.review = outcome.stamps;
    next.updated_at = now;

    Ok(TransitionPlan {
        article: next,
        prior,
        requested: request.requested,
        effective,
        applied_rules: outcome.applied,
    })
}

/// Applies status changes to stored articles.
pub struct TransitionService<'a, S: ArticleStore> {
    store: &'a S,
    table: &'a TransitionTable,
    max_retries: u32,
}

impl<'a, S: ArticleStore> TransitionService<'a, S> {
    /// Creates a service over a store and table.
    ///
    /// `max_retries` is the number of extra attempts after a conflicting
    /// commit.
    pub fn new(store: &'a S, table: &'a TransitionTable, max_retries: u32) -> Self {
        Self {
            store,
            table,
            max_retries,
        }
    }

    /// Parses requested status text for the article `id`.
    ///
    /// Text that names no status goes through the validator against the
    /// stored status, so it fails the way a dry-run check does: a
    /// `NoSuchPath` denial, or `UnrecognizedSource` when the stored status is
    /// unknown too.
    ///
    /// # Errors
    ///
    /// Returns an error if the text names no status, or the article cannot
    /// be loaded.
    pub fn parse_requested(
        &self,
        id: &str,
        requested: &str,
        role: ActorRole,
    ) -> Result<ArticleStatus> {
        if let Ok(status) = requested.parse::<ArticleStatus>() {
            return Ok(status);
        }

        let stored = match self.store.load(id) {
            Ok(article) => article.status.as_str().to_string(),
            Err(CoreError::UnrecognizedStoredStatus { status, .. }) => status,
            Err(err) => return Err(err.into()),
        };
        match validate_raw(self.table, &stored, requested, role).into_result() {
            Err(denial) => {
                debug!(
                    article_id = %id,
                    from = %stored,
                    to = %requested,
                    role = %role,
                    reason = %denial,
                    "transition denied"
                );
                Err(AppError::TransitionDenied(denial))
            }
            Ok(()) => Err(AppError::InvalidInput(format!("Invalid status: {}", requested))),
        }
    }

    /// Applies a status change at the current time.
    ///
    /// # Errors
    ///
    /// See [`apply_at`](Self::apply_at).
    pub fn apply(
        &self,
        id: &str,
        request: &TransitionRequest,
        actor: &Actor,
    ) -> Result<TransitionPlan> {
        self.apply_at(id, request, actor, Utc::now())
    }

    /// Applies a status change with an explicit transition time.
    ///
    /// # Returns
    ///
    /// The committed plan; its article carries the new version.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The article does not exist
    /// - The stored status is not a known status (an `UnrecognizedSource`
    ///   denial)
    /// - The transition is denied against the freshly read status
    /// - A rejection reason is missing
    /// - Concurrent writes outlast the retry budget
    pub fn apply_at(
        &self,
        id: &str,
        request: &TransitionRequest,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<TransitionPlan> {
        let mut attempt = 0;
        loop {
            let current = match self.store.load(id) {
                Ok(current) => current,
                Err(CoreError::UnrecognizedStoredStatus { id, status }) => {
                    return Err(self.deny_unrecognized(id, status, request, actor));
                }
                Err(err) => return Err(err.into()),
            };
            let mut plan = plan_transition(self.table, &current, request, actor, now)?;

            match self
                .store
                .compare_and_swap(&plan.article, current.status, current.version)
            {
                Ok(committed) => {
                    info!(
                        article_id = %committed.id,
                        from = %plan.prior,
                        to = %plan.effective,
                        requested = %plan.requested,
                        role = %actor.role,
                        version = committed.version,
                        rules = ?plan.applied_rules,
                        "status change committed"
                    );
                    plan.article = committed;
                    return Ok(plan);
                }
                Err(CoreError::Conflict { .. }) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        article_id = %id,
                        attempt,
                        max_retries = self.max_retries,
                        "article changed during status update; retrying against fresh copy"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Runs a stored status the store could not recognize through the
    /// validator, which denies it.
    fn deny_unrecognized(
        &self,
        id: String,
        status: String,
        request: &TransitionRequest,
        actor: &Actor,
    ) -> AppError {
        let effective = resolve_effective_target(request.requested, actor.role);
        match validate_raw(self.table, &status, effective.as_str(), actor.role).into_result() {
            Err(denial) => {
                warn!(
                    article_id = %id,
                    stored_status = %status,
                    to = %effective,
                    role = %actor.role,
                    reason = %denial,
                    "transition denied"
                );
                AppError::TransitionDenied(denial)
            }
            Ok(()) => CoreError::UnrecognizedStoredStatus { id, status }.into(),
        }
    }
}
