// Rust guideline compliant 2026-02-06

//! Implementation of the `warta create` command.

use super::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use warta_app::{create_article, parse_timestamp, NewArticle};

/// Creates a new article in `draft`, or in `scheduled` when `scheduled` is
/// given as an RFC 3339 time.
///
/// # Arguments
///
/// * `root` - Repository root
/// * `title` - Headline
/// * `author` - Author; falls back to `default_author` from config
/// * `content` - Body text
/// * `scheduled` - Planned publication time
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The `.warta` directory does not exist
/// - The title or author is missing
/// - The scheduled time is malformed or in the past
/// - The article file cannot be written
pub fn execute(
    root: &Path,
    title: String,
    author: Option<String>,
    content: Option<String>,
    scheduled: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let workspace = Workspace::open(root)?;
    let scheduled_for = scheduled.as_deref().map(parse_timestamp).transpose()?;

    let article = create_article(
        &workspace.storage,
        NewArticle {
            title,
            author,
            content: content.unwrap_or_default(),
            scheduled_for,
        },
        &workspace.config,
        Utc::now(),
    )?;

    Ok(formatter.format_article(&article))
}
