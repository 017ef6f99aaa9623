// Rust guideline compliant 2026-02-06

//! Implementation of the `warta init` command.
//!
//! Initializes a new Warta repository by creating the `.warta` directory,
//! an empty article file and the default configuration.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use warta_app::RepoContext;

/// Initializes a new Warta repository under `root`.
///
/// Existing files are kept, so running it twice is safe.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(root: &Path, formatter: &dyn OutputFormatter) -> Result<String> {
    let repo = RepoContext::init(root)?;
    Ok(formatter.format_message(&format!(
        "Warta repository initialized at {}",
        repo.warta_dir().display()
    )))
}
