// Rust guideline compliant 2026-02-06

//! Core data models for Warta.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    /// Being written; not visible on the public site.
    Draft,
    /// Submitted by its writer and waiting for an editor.
    PendingReview,
    /// Live on the public site.
    Published,
    /// Sent back by an editor with a rejection note.
    Rejected,
    /// Held for a future publication time. Only assigned at creation.
    Scheduled,
    /// Withdrawn from the public site after publication.
    Archived,
}

impl ArticleStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ArticleStatus; 6] = [
        ArticleStatus::Draft,
        ArticleStatus::PendingReview,
        ArticleStatus::Published,
        ArticleStatus::Rejected,
        ArticleStatus::Scheduled,
        ArticleStatus::Archived,
    ];

    /// Returns the canonical snake_case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::PendingReview => "pending_review",
            ArticleStatus::Published => "published",
            ArticleStatus::Rejected => "rejected",
            ArticleStatus::Scheduled => "scheduled",
            ArticleStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        ArticleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::UnknownStatus(value.to_string()))
    }
}

/// Permission class of the user attempting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActorRole {
    /// Editor with review and publication rights.
    Admin,
    /// Author who drafts and submits articles.
    Writer,
    /// Site member without any transition rights.
    Reader,
}

impl ActorRole {
    /// Every role.
    pub const ALL: [ActorRole; 3] = [ActorRole::Admin, ActorRole::Writer, ActorRole::Reader];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Admin => "ADMIN",
            ActorRole::Writer => "WRITER",
            ActorRole::Reader => "READER",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_uppercase();
        ActorRole::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| Error::UnknownRole(value.to_string()))
    }
}

/// Review metadata stamped as a consequence of admitted transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStamps {
    /// Display name of the editor who last published or rejected the article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    /// When the article was last published or rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// First publication time, or a caller-chosen time while unpublished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Reason given by the editor on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_note: Option<String>,
}

/// A news article and its workflow state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique hash-based identifier (format: art-XXXXXX).
    pub id: String,
    /// URL slug derived from the title.
    pub slug: String,
    /// Headline.
    pub title: String,
    /// Short summary shown in listings.
    #[serde(default)]
    pub excerpt: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Current lifecycle stage.
    pub status: ArticleStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last write time.
    pub updated_at: DateTime<Utc>,
    /// Review metadata.
    #[serde(default)]
    pub review: ReviewStamps,
    /// Write counter checked by compare-and-swap.
    #[serde(default)]
    pub version: u64,
}

impl Article {
    /// Creates a new draft article.
    ///
    /// # Arguments
    ///
    /// * `title` - The headline
    /// * `author` - The author display name
    ///
    /// # Returns
    ///
    /// A new article in `draft` with empty review metadata.
    pub fn new(title: String, author: String) -> Self {
        Self::new_at(title, author, Utc::now())
    }

    /// Creates a new draft article with an explicit creation time.
    pub fn new_at(title: String, author: String, now: DateTime<Utc>) -> Self {
        let id = crate::identity::generate_id(&title, &author, now.timestamp(), 0);
        let slug = crate::identity::slugify(&title);

        Self {
            id,
            slug,
            title,
            excerpt: String::new(),
            content: String::new(),
            author,
            status: ArticleStatus::Draft,
            created_at: now,
            updated_at: now,
            review: ReviewStamps::default(),
            version: 0,
        }
    }

    /// Creates an article held in `scheduled` until `publish_at`.
    ///
    /// `scheduled` is never the destination of a transition, so creation is
    /// the only way into it. The intended publication time is kept in
    /// `published_at` until the article is actually published.
    pub fn new_scheduled(title: String, author: String, publish_at: DateTime<Utc>) -> Self {
        Self::new(title, author).scheduled_for(publish_at)
    }

    /// Moves a freshly created article into `scheduled` for `publish_at`.
    #[must_use]
    pub fn scheduled_for(mut self, publish_at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Scheduled;
        self.review.published_at = Some(publish_at);
        self
    }

    /// Validates the article data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title, slug or author is empty
    /// - ID format is invalid
    /// - The article is `rejected` without a rejection note
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidArticle("Title cannot be empty".to_string()));
        }

        if self.slug.is_empty() {
            return Err(Error::InvalidArticle("Slug cannot be empty".to_string()));
        }

        if self.author.trim().is_empty() {
            return Err(Error::InvalidArticle("Author cannot be empty".to_string()));
        }

        crate::identity::validate_id_format(&self.id)?;

        if self.status == ArticleStatus::Rejected
            && self
                .review
                .rejection_note
                .as_deref()
                .map_or(true, |note| note.trim().is_empty())
        {
            return Err(Error::InvalidArticle(format!(
                "Rejected article {} has no rejection note",
                self.id
            )));
        }

        Ok(())
    }

    /// Returns true if the article is visible on the public site.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}
