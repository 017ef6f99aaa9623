// Rust guideline compliant 2026-02-09

//! Article creation.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::info;
use warta_core::identity::generate_id;
use warta_core::{Article, ArticleStore, Config};

const MAX_ID_ATTEMPTS: u32 = 64;

/// Input for a new article.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    /// Headline.
    pub title: String,
    /// Author; falls back to `default_author` from config.
    pub author: Option<String>,
    /// Body text.
    pub content: String,
    /// When set, the article starts in `scheduled` for this time.
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Creates and stores a new article.
///
/// The article starts in `draft`, or in `scheduled` when a publication time
/// is given. The excerpt is derived from the content.
///
/// # Arguments
///
/// * `store` - Article store
/// * `input` - New article fields
/// * `config` - Repository configuration
/// * `now` - Creation time
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty
/// - No author is given and no default author is configured
/// - The scheduled time is not in the future
/// - No free ID could be generated
/// - The store cannot be written
pub fn create_article<S: ArticleStore>(
    store: &S,
    input: NewArticle,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<Article> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    let author = input
        .author
        .or_else(|| config.default_author.clone())
        .map(|author| author.trim().to_string())
        .filter(|author| !author.is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput(
                "No author given and no default_author configured".to_string(),
            )
        })?;

    let mut article = Article::new_at(title, author, now);
    if let Some(at) = input.scheduled_for {
        if at <= now {
            return Err(AppError::InvalidInput(format!(
                "Scheduled time {} is not in the future",
                at.to_rfc3339()
            )));
        }
        article = article.scheduled_for(at);
    }
    article.excerpt = derive_excerpt(&input.content, config.excerpt_length);
    article.content = input.content;

    let taken: HashSet<String> = store.load_all()?.into_iter().map(|a| a.id).collect();
    article.id = free_id(&article, &taken)?;

    store.insert(&article)?;
    info!(
        article_id = %article.id,
        status = %article.status,
        author = %article.author,
        "article created"
    );
    Ok(article)
}

fn free_id(article: &Article, taken: &HashSet<String>) -> Result<String> {
    let timestamp = article.created_at.timestamp();
    (0..MAX_ID_ATTEMPTS)
        .map(|nonce| generate_id(&article.title, &article.author, timestamp, nonce))
        .find(|id| !taken.contains(id))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Could not generate a free ID for '{}'",
                article.title
            ))
        })
}

/// Derives a listing excerpt from body text.
///
/// Whitespace is collapsed. Text longer than `max_chars` is cut at the last
/// word boundary that fits and gets a trailing ellipsis.
#[must_use]
pub fn derive_excerpt(content: &str, max_chars: usize) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let cut: String = collapsed.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}
