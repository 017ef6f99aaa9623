// Rust guideline compliant 2026-02-06

//! Command implementations for the Warta CLI.
//!
//! Every command takes the repository root explicitly and returns the text
//! to print, so the binary only decides where output goes.

pub mod check;
pub mod create;
pub mod graph;
pub mod init;
pub mod list;
pub mod show;
pub mod table;
pub mod transition;

use std::path::Path;
use warta_app::{resolve_article_id, AppError, RepoContext};
use warta_core::{Article, ArticleStore, Config, Storage};

/// Opened repository state shared by commands that touch articles.
pub(crate) struct Workspace {
    pub(crate) storage: Storage,
    pub(crate) config: Config,
}

impl Workspace {
    pub(crate) fn open(root: &Path) -> Result<Self, AppError> {
        let repo = RepoContext::discover(Some(root))?;
        Ok(Self {
            storage: repo.open_storage()?,
            config: repo.load_config()?,
        })
    }

    /// Resolves a full or partial ID against every stored record, including
    /// ones that no longer read as articles.
    pub(crate) fn resolve_id(&self, id: &str) -> Result<String, AppError> {
        resolve_article_id(id, &self.storage.stored_ids()?)
    }

    /// Loads the article a full or partial ID refers to.
    pub(crate) fn find(&self, id: &str) -> Result<Article, AppError> {
        let full_id = self.resolve_id(id)?;
        Ok(self.storage.load(&full_id)?)
    }
}
