// Rust guideline compliant 2026-02-06

//! Implementation of the `warta list` command.

use super::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use warta_app::{list_articles, parse_sort_field, parse_status, AppError, ListOptions};
use warta_core::ArticleStore;

/// Lists articles with optional filters.
///
/// # Arguments
///
/// * `root` - Repository root
/// * `status` - Status filter
/// * `author` - Author filter (case-insensitive)
/// * `public` - Only published articles
/// * `sort` - Sort field
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The `.warta` directory does not exist
/// - A filter or sort field is invalid
/// - The article file cannot be read
pub fn execute(
    root: &Path,
    status: Option<String>,
    author: Option<String>,
    public: bool,
    sort: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let workspace = Workspace::open(root)?;

    let options = ListOptions {
        status: status.as_deref().map(parse_status).transpose()?,
        author,
        public_only: public,
        sort: sort.as_deref().map(parse_sort_field).transpose()?,
        ..ListOptions::default()
    };

    let articles = workspace.storage.load_all().map_err(AppError::from)?;
    Ok(formatter.format_list(&list_articles(articles, &options)))
}
