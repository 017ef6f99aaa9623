// Rust guideline compliant 2026-02-09

//! Listing and filtering helpers for Warta.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use warta_core::{Article, ArticleStatus};

/// Fields accepted by `--sort`.
pub const SORT_FIELDS: [&str; 7] = [
    "id",
    "title",
    "status",
    "author",
    "created_at",
    "updated_at",
    "published_at",
];

/// List options for filtering and sorting articles.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<ArticleStatus>,
    /// Filter by author (case-insensitive).
    pub author: Option<String>,
    /// Only articles visible on the public site.
    pub public_only: bool,
    /// Filter by created_at >= timestamp.
    pub created_after: Option<DateTime<Utc>>,
    /// Filter by created_at <= timestamp.
    pub created_before: Option<DateTime<Utc>>,
    /// Sort field override; see [`SORT_FIELDS`].
    pub sort: Option<String>,
}

/// Parses a status filter.
///
/// # Errors
///
/// Returns an error if the status is not one of the six known statuses.
pub fn parse_status(value: &str) -> Result<ArticleStatus> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid status filter: {}", value)))
}

/// Checks a sort field name.
///
/// # Errors
///
/// Returns an error if the field is not in [`SORT_FIELDS`].
pub fn parse_sort_field(value: &str) -> Result<String> {
    let field = value.trim().to_lowercase();
    if SORT_FIELDS.contains(&field.as_str()) {
        Ok(field)
    } else {
        Err(AppError::InvalidInput(format!(
            "Invalid sort field: {} (expected one of {})",
            value,
            SORT_FIELDS.join(", ")
        )))
    }
}

/// Filters and sorts articles based on `ListOptions`.
///
/// Without a sort field, the most recently updated article comes first.
pub fn list_articles(mut articles: Vec<Article>, options: &ListOptions) -> Vec<Article> {
    articles = apply_filters(articles, options);

    match options.sort.as_deref() {
        Some(field) => sort_articles(&mut articles, field),
        None => articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }

    articles
}

fn apply_filters(articles: Vec<Article>, options: &ListOptions) -> Vec<Article> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |a: &Article| {
        if let Some(status) = options.status {
            if a.status != status {
                return false;
            }
        }

        if let Some(ref author) = options.author {
            if !a.author.eq_ignore_ascii_case(author) {
                return false;
            }
        }

        if options.public_only && !a.is_public() {
            return false;
        }

        if let Some(after) = options.created_after {
            if a.created_at < after {
                return false;
            }
        }
        if let Some(before) = options.created_before {
            if a.created_at > before {
                return false;
            }
        }

        true
    };

    if articles.len() >= PARALLEL_THRESHOLD {
        articles.into_par_iter().filter(|a| predicate(a)).collect()
    } else {
        articles.into_iter().filter(predicate).collect()
    }
}

fn sort_articles(articles: &mut [Article], field: &str) {
    match field {
        "id" => articles.sort_by(|a, b| a.id.cmp(&b.id)),
        "title" => articles.sort_by(|a, b| a.title.cmp(&b.title)),
        "status" => articles.sort_by(|a, b| a.status.cmp(&b.status)),
        "author" => articles.sort_by(|a, b| a.author.cmp(&b.author)),
        "created_at" => articles.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        "updated_at" => articles.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        // Newest publication first; never-published articles last.
        "published_at" => articles.sort_by(|a, b| b.review.published_at.cmp(&a.review.published_at)),
        _ => articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}
