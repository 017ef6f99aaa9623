// Rust guideline compliant 2026-02-06

//! Implementation of the `warta check` command: a dry run of the validator.

use crate::OutputFormatter;
use anyhow::Result;
use warta_app::{check_transition, parse_role};
use warta_core::standard_table;

/// Checks whether `role` may move an article from `from` to `to`.
///
/// Denials are printed, not returned as errors; `admitted` is false in that
/// case. No repository is needed.
///
/// # Errors
///
/// Returns an error if the role is not ADMIN, WRITER or READER.
pub fn execute(
    from: &str,
    to: &str,
    role: &str,
    formatter: &dyn OutputFormatter,
) -> Result<(String, bool)> {
    let decision = check_transition(standard_table(), from, to, role)?;
    let role = parse_role(role)?;
    Ok((
        formatter.format_decision(from, to, role, &decision),
        decision.is_admitted(),
    ))
}
