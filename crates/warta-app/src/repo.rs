// Rust guideline compliant 2026-02-09

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use warta_core::{Config, Storage};

/// Name of the directory holding Warta data under a repository root.
pub const WARTA_DIR: &str = ".warta";

/// Repository path metadata for a Warta workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    warta_dir: PathBuf,
    articles_path: PathBuf,
}

impl RepoContext {
    /// Discovers a Warta repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Returns
    ///
    /// A `RepoContext` with resolved paths for the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository root cannot be resolved
    /// - The `.warta` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.warta_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.warta_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.warta` directory, an empty article file and a default
    /// config under `root`.
    ///
    /// Existing files are left untouched, so running this twice is safe.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(root: &Path) -> Result<Self> {
        let context = Self::at(root.to_path_buf());
        std::fs::create_dir_all(&context.warta_dir)?;

        if !context.articles_path.exists() {
            std::fs::File::create(&context.articles_path)?;
        }
        if !context.config_path().exists() {
            Config::default().save(&context.warta_dir)?;
        }

        debug!(path = %context.warta_dir.display(), "initialized repository");
        Ok(context)
    }

    fn at(root: PathBuf) -> Self {
        let warta_dir = root.join(WARTA_DIR);
        Self {
            articles_path: warta_dir.join("articles.jsonl"),
            warta_dir,
            root,
        }
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.warta` directory path.
    #[must_use]
    pub fn warta_dir(&self) -> &Path {
        self.warta_dir.as_path()
    }

    /// Returns the articles JSONL path.
    #[must_use]
    pub fn articles_path(&self) -> &Path {
        self.articles_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.warta_dir.join("config.toml")
    }

    /// Opens storage for the articles file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.articles_path.clone())?)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or fails
    /// validation.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.warta_dir())?)
    }
}
