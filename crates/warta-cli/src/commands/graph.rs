// Rust guideline compliant 2026-02-06

//! Implementation of the `warta graph` command.

use crate::{GraphReport, OutputFormatter};
use anyhow::Result;
use warta_app::{parse_role, parse_status};
use warta_core::{standard_table, TransitionGraph};

/// Reports reachability over the standard transition table.
///
/// # Arguments
///
/// * `from` - Start status for the reachability walk
/// * `role` - Restrict the walk to moves this role may make
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the status or role is invalid.
pub fn execute(
    from: Option<&str>,
    role: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let graph = TransitionGraph::from_table(standard_table());
    let from = from.map(parse_status).transpose()?;
    let role = role.map(parse_role).transpose()?;

    let reachable = match (from, role) {
        (Some(start), Some(role)) => graph.reachable_by(start, role),
        (Some(start), None) => graph.reachable_from(start),
        (None, _) => Vec::new(),
    };

    let report = GraphReport {
        from,
        role,
        reachable,
        unreachable: graph.unreachable_statuses(),
        terminal: graph.terminal_statuses(),
    };
    Ok(formatter.format_graph(&report))
}
