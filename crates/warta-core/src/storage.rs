// Rust guideline compliant 2026-02-06

//! Storage module for article persistence.
//!
//! The workflow itself is storage-agnostic. This module supplies the
//! persistence contract the update handler relies on ([`ArticleStore`]) and
//! two implementations: a JSONL file store with file locking, and an
//! in-memory store.
//!
//! Status transitions are written with [`ArticleStore::compare_and_swap`]:
//! the write lands only if the stored article still has the status and
//! version the decision was computed against.

use crate::{Article, ArticleStatus, Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Persistence contract for the article update handler.
pub trait ArticleStore {
    /// Loads the current stored copy of an article.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no article has this ID.
    fn load(&self, id: &str) -> Result<Article>;

    /// Loads every stored article.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_all(&self) -> Result<Vec<Article>>;

    /// Inserts a new article.
    ///
    /// # Errors
    ///
    /// Returns an error if the article is invalid, its ID is taken, or the
    /// store cannot be written.
    fn insert(&self, article: &Article) -> Result<()>;

    /// Writes `article` only if the stored copy still has
    /// `expected_status` and `expected_version`.
    ///
    /// On success the stored copy's version is one higher than
    /// `expected_version`, and that copy is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the stored copy moved on,
    /// [`Error::NotFound`] if it is gone, or a validation/IO error.
    fn compare_and_swap(
        &self,
        article: &Article,
        expected_status: ArticleStatus,
        expected_version: u64,
    ) -> Result<Article>;
}

/// Checks a stored copy against the expected status and version and
/// produces the copy to write.
fn guarded_replacement(
    stored: &Article,
    article: &Article,
    expected_status: ArticleStatus,
    expected_version: u64,
) -> Result<Article> {
    if stored.status != expected_status || stored.version != expected_version {
        warn!(
            article_id = %stored.id,
            expected_status = %expected_status,
            expected_version,
            found_status = %stored.status,
            found_version = stored.version,
            "compare-and-swap rejected stale write"
        );
        return Err(Error::Conflict {
            id: stored.id.clone(),
            expected_status,
            expected_version,
            found_status: stored.status,
            found_version: stored.version,
        });
    }

    let mut next = article.clone();
    next.version = expected_version + 1;
    next.validate()?;
    Ok(next)
}

/// JSONL file store for articles.
///
/// One article per line. Whole-file writes go through a temp file and a
/// rename; read-modify-write sequences hold an exclusive lock file, waiting for
/// other writers to release it.
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all articles, one JSON object per line.
    ///
    /// A missing file is an empty store. Blank lines are ignored. Lines that
    /// do not deserialize are left out with a warning but stay on disk; see
    /// [`ArticleStore::load`] for how they surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or an article fails
    /// validation.
    pub fn read_all(&self) -> Result<Vec<Article>> {
        Ok(self
            .read_lines()?
            .into_iter()
            .filter_map(|line| match line {
                StoredLine::Article(article) => Some(article),
                StoredLine::Unreadable { .. } => None,
            })
            .collect())
    }

    /// Returns the ID of every stored record, readable or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn stored_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .read_lines()?
            .iter()
            .filter_map(|line| line.id().map(str::to_string))
            .collect())
    }

    fn read_lines(&self) -> Result<Vec<StoredLine>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut lines = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let stored = StoredLine::parse(line)?;
            if let StoredLine::Unreadable { id, status, .. } = &stored {
                warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    article_id = id.as_deref().unwrap_or("-"),
                    status = status.as_deref().unwrap_or("-"),
                    "keeping unreadable JSON line"
                );
            }
            lines.push(stored);
        }

        Ok(lines)
    }

    /// Replaces the file contents with `articles`.
    ///
    /// Unreadable lines already on disk are kept unless one of `articles`
    /// takes over their ID.
    ///
    /// # Errors
    ///
    /// Returns an error if any article is invalid or the write fails.
    pub fn save_all(&self, articles: &[Article]) -> Result<()> {
        for article in articles {
            article.validate()?;
        }

        let kept = self.read_lines()?.into_iter().filter(|line| match line {
            StoredLine::Article(_) => false,
            StoredLine::Unreadable { id, .. } => id
                .as_deref()
                .map_or(true, |id| !articles.iter().any(|article| article.id == id)),
        });
        let lines: Vec<StoredLine> = articles
            .iter()
            .cloned()
            .map(StoredLine::Article)
            .chain(kept)
            .collect();

        self.write_lines(&lines)
    }

    fn write_lines(&self, lines: &[StoredLine]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for line in lines {
                file.write_all(line.to_json()?.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be taken or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        // Waits for other writers.
        lock_file.lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}

impl ArticleStore for Storage {
    /// Loads one article.
    ///
    /// A record that is on disk but cannot be read is an error, not
    /// [`Error::NotFound`]: an unknown stored status is
    /// [`Error::UnrecognizedStoredStatus`], anything else
    /// [`Error::InvalidArticle`].
    fn load(&self, id: &str) -> Result<Article> {
        let line = self
            .read_lines()?
            .into_iter()
            .find(|line| line.id() == Some(id))
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        line.into_article()
    }

    fn load_all(&self) -> Result<Vec<Article>> {
        self.read_all()
    }

    fn insert(&self, article: &Article) -> Result<()> {
        article.validate()?;
        self.with_lock(|| {
            let mut lines = self.read_lines()?;
            if lines.iter().any(|existing| existing.id() == Some(article.id.as_str())) {
                return Err(Error::InvalidArticle(format!(
                    "Article {} already exists",
                    article.id
                )));
            }
            lines.push(StoredLine::Article(article.clone()));
            self.write_lines(&lines)?;
            debug!(article_id = %article.id, path = %self.path.display(), "inserted article");
            Ok(())
        })
    }

    fn compare_and_swap(
        &self,
        article: &Article,
        expected_status: ArticleStatus,
        expected_version: u64,
    ) -> Result<Article> {
        self.with_lock(|| {
            let mut lines = self.read_lines()?;
            let pos = lines
                .iter()
                .position(|stored| stored.id() == Some(article.id.as_str()))
                .ok_or_else(|| Error::NotFound(article.id.clone()))?;

            let stored = match &lines[pos] {
                StoredLine::Article(stored) => stored,
                unreadable => return Err(unreadable.unreadable_error(&article.id)),
            };
            let next = guarded_replacement(stored, article, expected_status, expected_version)?;
            lines[pos] = StoredLine::Article(next.clone());
            self.write_lines(&lines)?;
            debug!(article_id = %next.id, version = next.version, "compare-and-swap committed");
            Ok(next)
        })
    }
}

/// One non-blank line of the JSONL file.
enum StoredLine {
    Article(Article),
    /// Kept verbatim so rewrites never drop it.
    Unreadable {
        raw: String,
        id: Option<String>,
        status: Option<String>,
    },
}

impl StoredLine {
    /// Parses a line, falling back to its raw `id` and `status` fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the line deserializes but fails validation.
    fn parse(raw: String) -> Result<Self> {
        match serde_json::from_str::<Article>(&raw) {
            Ok(article) => {
                article.validate()?;
                Ok(Self::Article(article))
            }
            Err(_) => {
                let value = serde_json::from_str::<serde_json::Value>(&raw).ok();
                let field = |name: &str| {
                    value
                        .as_ref()
                        .and_then(|value| value.get(name))
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                };
                let id = field("id");
                let status = field("status");
                Ok(Self::Unreadable { raw, id, status })
            }
        }
    }

    fn id(&self) -> Option<&str> {
        match self {
            Self::Article(article) => Some(&article.id),
            Self::Unreadable { id, .. } => id.as_deref(),
        }
    }

    fn to_json(&self) -> Result<String> {
        match self {
            Self::Article(article) => Ok(serde_json::to_string(article)?),
            Self::Unreadable { raw, .. } => Ok(raw.clone()),
        }
    }

    fn into_article(self) -> Result<Article> {
        match self {
            Self::Article(article) => Ok(article),
            Self::Unreadable { ref id, .. } => {
                let id = id.clone().unwrap_or_default();
                Err(self.unreadable_error(&id))
            }
        }
    }

    fn unreadable_error(&self, id: &str) -> Error {
        match self {
            Self::Unreadable {
                status: Some(status),
                ..
            } if status.parse::<ArticleStatus>().is_err() => Error::UnrecognizedStoredStatus {
                id: id.to_string(),
                status: status.clone(),
            },
            _ => Error::InvalidArticle(format!("Stored article {} could not be read", id)),
        }
    }
}

/// In-memory article store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: Mutex<BTreeMap<String, Article>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `articles`.
    ///
    /// # Errors
    ///
    /// Returns an error if any article is invalid or IDs repeat.
    pub fn with_articles(articles: Vec<Article>) -> Result<Self> {
        let store = Self::new();
        for article in &articles {
            store.insert(article)?;
        }
        Ok(store)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Article>> {
        self.articles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArticleStore for MemoryStore {
    fn load(&self, id: &str) -> Result<Article> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn load_all(&self) -> Result<Vec<Article>> {
        Ok(self.lock().values().cloned().collect())
    }

    fn insert(&self, article: &Article) -> Result<()> {
        article.validate()?;
        let mut articles = self.lock();
        if articles.contains_key(&article.id) {
            return Err(Error::InvalidArticle(format!(
                "Article {} already exists",
                article.id
            )));
        }
        articles.insert(article.id.clone(), article.clone());
        Ok(())
    }

    fn compare_and_swap(
        &self,
        article: &Article,
        expected_status: ArticleStatus,
        expected_version: u64,
    ) -> Result<Article> {
        let mut articles = self.lock();
        let stored = articles
            .get(&article.id)
            .ok_or_else(|| Error::NotFound(article.id.clone()))?;

        let next = guarded_replacement(stored, article, expected_status, expected_version)?;
        articles.insert(next.id.clone(), next.clone());
        Ok(next)
    }
}
