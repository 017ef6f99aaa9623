// Rust guideline compliant 2026-02-06

//! Implementation of the `warta show` command.

use super::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Shows an article by full or partial ID.
///
/// # Errors
///
/// Returns an error if:
/// - The `.warta` directory does not exist
/// - The ID is not found or is ambiguous
/// - The article file cannot be read
pub fn execute(root: &Path, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let workspace = Workspace::open(root)?;
    let article = workspace.find(id)?;
    Ok(formatter.format_article(&article))
}
