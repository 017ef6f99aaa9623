// Rust guideline compliant 2026-02-06

//! Tests for the article stores and their compare-and-swap guard.

use tempfile::TempDir;
use warta_core::{Article, ArticleStatus, ArticleStore, Error, MemoryStore, Storage};

fn sample_article(title: &str) -> Article {
    let mut article = Article::new(title.to_string(), "Dewi".to_string());
    article.content = "Isi berita".to_string();
    article
}

/// Serializes `article` with its status replaced by `status`.
fn line_with_status(article: &Article, status: &str) -> String {
    let mut value = serde_json::to_value(article).unwrap();
    value["status"] = serde_json::Value::String(status.to_string());
    serde_json::to_string(&value).unwrap()
}

fn temp_storage() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let storage = Storage::new(temp_dir.path().join("articles.jsonl"))
        .expect("Failed to create storage");
    (temp_dir, storage)
}

#[test]
fn test_empty_path_rejected() {
    assert!(Storage::new("".into()).is_err());
}

#[test]
fn test_missing_file_is_empty_store() {
    let (_temp_dir, storage) = temp_storage();
    assert!(storage.load_all().unwrap().is_empty());
}

#[test]
fn test_insert_and_load() {
    let (_temp_dir, storage) = temp_storage();
    let article = sample_article("Banjir di Jakarta");
    storage.insert(&article).unwrap();

    let loaded = storage.load(&article.id).unwrap();
    assert_eq!(loaded, article);
    assert_eq!(loaded.status, ArticleStatus::Draft);
}

#[test]
fn test_insert_duplicate_id_fails() {
    let (_temp_dir, storage) = temp_storage();
    let article = sample_article("Pemilu");
    storage.insert(&article).unwrap();
    assert!(matches!(
        storage.insert(&article),
        Err(Error::InvalidArticle(_))
    ));
}

#[test]
fn test_load_unknown_id_is_not_found() {
    let (_temp_dir, storage) = temp_storage();
    assert!(matches!(storage.load("art-000000"), Err(Error::NotFound(_))));
}

#[test]
fn test_compare_and_swap_bumps_version() {
    let (_temp_dir, storage) = temp_storage();
    let article = sample_article("Harga beras naik");
    storage.insert(&article).unwrap();

    let mut next = article.clone();
    next.status = ArticleStatus::PendingReview;
    let committed = storage
        .compare_and_swap(&next, ArticleStatus::Draft, 0)
        .unwrap();

    assert_eq!(committed.version, 1);
    let stored = storage.load(&article.id).unwrap();
    assert_eq!(stored.status, ArticleStatus::PendingReview);
    assert_eq!(stored.version, 1);
}

#[test]
fn test_compare_and_swap_rejects_stale_status() {
    let (_temp_dir, storage) = temp_storage();
    let article = sample_article("Gempa");
    storage.insert(&article).unwrap();

    let mut first = article.clone();
    first.status = ArticleStatus::PendingReview;
    storage
        .compare_and_swap(&first, ArticleStatus::Draft, 0)
        .unwrap();

    let mut stale = article.clone();
    stale.status = ArticleStatus::Published;
    let err = storage
        .compare_and_swap(&stale, ArticleStatus::Draft, 0)
        .unwrap_err();

    match err {
        Error::Conflict {
            expected_status,
            found_status,
            found_version,
            ..
        } => {
            assert_eq!(expected_status, ArticleStatus::Draft);
            assert_eq!(found_status, ArticleStatus::PendingReview);
            assert_eq!(found_version, 1);
        }
        other => panic!("Expected conflict, got {:?}", other),
    }

    assert_eq!(
        storage.load(&article.id).unwrap().status,
        ArticleStatus::PendingReview,
        "Stale write must not land"
    );
}

#[test]
fn test_compare_and_swap_rejects_stale_version_same_status() {
    let store = MemoryStore::new();
    let article = sample_article("Piala Dunia");
    store.insert(&article).unwrap();

    let mut edit = article.clone();
    edit.content = "Revisi pertama".to_string();
    store
        .compare_and_swap(&edit, ArticleStatus::Draft, 0)
        .unwrap();

    let mut stale = article.clone();
    stale.content = "Revisi lama".to_string();
    assert!(matches!(
        store.compare_and_swap(&stale, ArticleStatus::Draft, 0),
        Err(Error::Conflict { found_version: 1, .. })
    ));
}

#[test]
fn test_compare_and_swap_validates_article() {
    let store = MemoryStore::new();
    let article = sample_article("Cuaca");
    store.insert(&article).unwrap();

    let mut broken = article.clone();
    broken.status = ArticleStatus::Rejected;
    assert!(matches!(
        store.compare_and_swap(&broken, ArticleStatus::Draft, 0),
        Err(Error::InvalidArticle(_))
    ));
    assert_eq!(store.load(&article.id).unwrap().status, ArticleStatus::Draft);
}

#[test]
fn test_compare_and_swap_missing_article() {
    let store = MemoryStore::new();
    let article = sample_article("Hilang");
    assert!(matches!(
        store.compare_and_swap(&article, ArticleStatus::Draft, 0),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_malformed_lines_are_left_out_of_load_all() {
    let (_temp_dir, storage) = temp_storage();
    let article = sample_article("Ekonomi");
    storage.insert(&article).unwrap();

    let later = sample_article("Olahraga");
    let content = format!(
        "{{not json}}\n\n{}\n{}\n",
        serde_json::to_string(&article).unwrap(),
        serde_json::to_string(&later).unwrap()
    );
    std::fs::write(storage.path(), content).unwrap();

    let articles = storage.load_all().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].id, article.id);
    assert_eq!(articles[1].id, later.id);
}

/// Writes a valid article and one stored with the status "deleted".
fn storage_with_deleted_status() -> (TempDir, Storage, Article, Article) {
    let (temp_dir, storage) = temp_storage();
    let valid = sample_article("Cuaca");
    let corrupt = sample_article("Ditarik");
    let content = format!(
        "{}\n{}\n",
        serde_json::to_string(&valid).unwrap(),
        line_with_status(&corrupt, "deleted")
    );
    std::fs::write(storage.path(), content).unwrap();
    (temp_dir, storage, valid, corrupt)
}

#[test]
fn test_unrecognized_stored_status_is_reported_not_missing() {
    let (_temp_dir, storage, _valid, corrupt) = storage_with_deleted_status();

    match storage.load(&corrupt.id) {
        Err(Error::UnrecognizedStoredStatus { id, status }) => {
            assert_eq!(id, corrupt.id);
            assert_eq!(status, "deleted");
        }
        other => panic!("expected unrecognized stored status, got {:?}", other),
    }
    assert_eq!(storage.load_all().unwrap().len(), 1);
    assert_eq!(storage.stored_ids().unwrap().len(), 2);
}

#[test]
fn test_unreadable_record_survives_writes_to_other_articles() {
    let (_temp_dir, storage, valid, corrupt) = storage_with_deleted_status();
    let corrupt_line = line_with_status(&corrupt, "deleted");

    let mut next = valid.clone();
    next.status = ArticleStatus::PendingReview;
    storage
        .compare_and_swap(&next, ArticleStatus::Draft, valid.version)
        .unwrap();
    storage.insert(&sample_article("Pasar")).unwrap();

    let content = std::fs::read_to_string(storage.path()).unwrap();
    assert!(content.lines().any(|line| line == corrupt_line));
    assert_eq!(content.lines().count(), 3);
    assert!(matches!(
        storage.load(&corrupt.id),
        Err(Error::UnrecognizedStoredStatus { .. })
    ));
}

#[test]
fn test_unreadable_record_blocks_insert_and_compare_and_swap() {
    let (_temp_dir, storage, _valid, corrupt) = storage_with_deleted_status();

    assert!(matches!(
        storage.insert(&corrupt),
        Err(Error::InvalidArticle(_))
    ));
    assert!(matches!(
        storage.compare_and_swap(&corrupt, ArticleStatus::Draft, corrupt.version),
        Err(Error::UnrecognizedStoredStatus { .. })
    ));
}

#[test]
fn test_save_all_keeps_unreadable_lines() {
    let (_temp_dir, storage, valid, corrupt) = storage_with_deleted_status();

    storage.save_all(&[valid.clone()]).unwrap();
    let content = std::fs::read_to_string(storage.path()).unwrap();
    assert!(content.contains("\"deleted\""));
    assert_eq!(content.lines().count(), 2);

    // An article written under the same ID replaces the unreadable line.
    storage.save_all(&[valid, corrupt.clone()]).unwrap();
    assert_eq!(storage.load(&corrupt.id).unwrap().status, ArticleStatus::Draft);
    assert!(!std::fs::read_to_string(storage.path())
        .unwrap()
        .contains("\"deleted\""));
}

#[test]
fn test_save_all_writes_one_line_per_article() {
    let (_temp_dir, storage) = temp_storage();
    let articles = vec![sample_article("Satu"), sample_article("Dua")];
    storage.save_all(&articles).unwrap();

    let content = std::fs::read_to_string(storage.path()).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(!storage.path().with_extension("jsonl.tmp").exists());
}

#[test]
fn test_memory_store_with_articles() {
    let store =
        MemoryStore::with_articles(vec![sample_article("Satu"), sample_article("Dua")]).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 2);
}
