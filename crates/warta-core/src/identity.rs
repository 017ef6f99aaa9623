// Rust guideline compliant 2026-02-06

//! Hash-based article IDs, slugs and partial ID resolution.

use crate::{Article, Error, Result};
use sha2::{Digest, Sha256};

/// Prefix shared by every article ID.
pub const ID_PREFIX: &str = "art-";

const HASH_LEN: usize = 6;

/// Generates an article ID from its creation inputs.
///
/// # Arguments
///
/// * `title` - Article title
/// * `author` - Article author
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Disambiguator for collisions
///
/// # Returns
///
/// An ID of the form `art-XXXXXX` (six lowercase hex characters).
pub fn generate_id(title: &str, author: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(author.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}{}", ID_PREFIX, &hex[..HASH_LEN])
}

/// Checks that an ID has the `art-XXXXXX` shape.
///
/// # Errors
///
/// Returns an error if the prefix is missing or the hash part is not six
/// lowercase hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let hash = id
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::InvalidArticle(format!("ID must start with '{}': {}", ID_PREFIX, id)))?;

    let well_formed = hash.len() == HASH_LEN
        && hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if !well_formed {
        return Err(Error::InvalidArticle(format!(
            "ID hash must be {} lowercase hex characters: {}",
            HASH_LEN, id
        )));
    }

    Ok(())
}

/// Derives a URL slug from a title.
///
/// Runs of anything other than ASCII letters and digits collapse to a single
/// `-`. Falls back to `"article"` when nothing usable remains.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "article".to_string()
    } else {
        slug
    }
}

/// Resolves a partial ID (with or without the `art-` prefix) to a full ID.
///
/// # Errors
///
/// Returns an error if no article matches or more than one does.
pub fn resolve_partial_id(partial: &str, articles: &[Article]) -> Result<String> {
    resolve_partial_among(partial, articles.iter().map(|article| article.id.as_str()))
}

/// Resolves a partial ID against a list of known IDs.
///
/// Used where some stored records may not deserialize as articles but still
/// carry an ID.
///
/// # Errors
///
/// Returns an error if no ID matches or more than one does.
pub fn resolve_partial_among<'a, I>(partial: &str, ids: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial = partial.trim();
    if partial.is_empty() {
        return Err(Error::NotFound("empty ID".to_string()));
    }

    let ids: Vec<&str> = ids.into_iter().collect();
    if let Some(exact) = ids.iter().find(|id| **id == partial) {
        return Ok((*exact).to_string());
    }

    let needle = if partial.starts_with(ID_PREFIX) {
        partial.to_string()
    } else {
        format!("{}{}", ID_PREFIX, partial)
    };

    let matches: Vec<String> = ids
        .iter()
        .filter(|id| id.starts_with(&needle))
        .map(|id| (*id).to_string())
        .collect();

    match matches.len() {
        0 => Err(Error::NotFound(partial.to_string())),
        1 => Ok(matches[0].clone()),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches)),
    }
}
