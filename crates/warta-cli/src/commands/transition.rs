// Rust guideline compliant 2026-02-06

//! Implementation of the `warta transition` command.
//!
//! Runs the full update handler: writer escalation, validation against the
//! freshly read status, stamping, and a compare-and-swap commit that is
//! retried on concurrent writes.

use super::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use warta_app::{parse_role, parse_timestamp, Actor, TransitionRequest, TransitionService};
use warta_core::standard_table;

/// Arguments for `warta transition`.
#[derive(Debug, Clone)]
pub struct TransitionArgs {
    /// Full or partial article ID.
    pub id: String,
    /// Requested status.
    pub status: String,
    /// Acting role.
    pub role: String,
    /// Acting user's display name.
    pub actor: String,
    /// Rejection reason.
    pub reason: Option<String>,
    /// Publication time override (RFC 3339).
    pub published_at: Option<String>,
}

/// Moves an article to a new status.
///
/// # Errors
///
/// Returns an error if:
/// - The `.warta` directory does not exist
/// - The article, status, role or timestamp is invalid
/// - The workflow denies the transition
/// - A rejection has no reason
/// - Concurrent writes outlast the configured retries
pub fn execute(root: &Path, args: TransitionArgs, formatter: &dyn OutputFormatter) -> Result<String> {
    let workspace = Workspace::open(root)?;
    let id = workspace.resolve_id(&args.id)?;
    let actor = Actor::new(args.actor, parse_role(&args.role)?);

    let service = TransitionService::new(
        &workspace.storage,
        standard_table(),
        workspace.config.max_transition_retries,
    );

    let requested = service.parse_requested(&id, &args.status, actor.role)?;
    let mut request = TransitionRequest::to(requested);
    if let Some(reason) = args.reason {
        request = request.with_reason(reason);
    }
    if let Some(published_at) = args.published_at.as_deref() {
        request = request.with_published_at(parse_timestamp(published_at)?);
    }
    let plan = service.apply(&id, &request, &actor)?;

    Ok(formatter.format_transition(&plan))
}
