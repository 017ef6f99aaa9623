// Rust guideline compliant 2026-02-09

//! ID resolution helpers for Warta.

use crate::error::Result;
use warta_core::identity;

/// Resolves a partial article ID to its canonical full ID.
///
/// # Arguments
///
/// * `partial` - Partial or full article ID, with or without `art-`
/// * `ids` - Every stored article ID, including records that no longer
///   deserialize
///
/// # Returns
///
/// The canonical article ID.
///
/// # Errors
///
/// Returns an error if the partial ID is ambiguous or not found.
pub fn resolve_article_id(partial: &str, ids: &[String]) -> Result<String> {
    Ok(identity::resolve_partial_among(partial, ids.iter().map(String::as_str))?)
}
