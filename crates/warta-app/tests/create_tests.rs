// Rust guideline compliant 2026-02-09

//! Tests for article creation against the JSONL store.

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;
use warta_app::{create_article, AppError, NewArticle, RepoContext};
use warta_core::{ArticleStatus, ArticleStore, Config};

fn repo() -> (TempDir, RepoContext) {
    let temp = TempDir::new().unwrap();
    let repo = RepoContext::init(temp.path()).unwrap();
    (temp, repo)
}

#[test]
fn test_create_draft_persists() {
    let (_temp, repo) = repo();
    let storage = repo.open_storage().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();

    let article = create_article(
        &storage,
        NewArticle {
            title: "  Harga Beras Turun ".to_string(),
            author: Some("Rina".to_string()),
            content: "Harga beras di pasar induk turun untuk pekan kedua.".to_string(),
            scheduled_for: None,
        },
        &Config::default(),
        now,
    )
    .unwrap();

    assert_eq!(article.status, ArticleStatus::Draft);
    assert_eq!(article.title, "Harga Beras Turun");
    assert_eq!(article.slug, "harga-beras-turun");
    assert!(article.excerpt.starts_with("Harga beras"));
    assert_eq!(storage.load(&article.id).unwrap(), article);
}

#[test]
fn test_create_scheduled() {
    let (_temp, repo) = repo();
    let storage = repo.open_storage().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();
    let at = now + Duration::days(1);

    let article = create_article(
        &storage,
        NewArticle {
            title: "Besok Pagi".to_string(),
            author: Some("Rina".to_string()),
            scheduled_for: Some(at),
            ..NewArticle::default()
        },
        &Config::default(),
        now,
    )
    .unwrap();

    assert_eq!(article.status, ArticleStatus::Scheduled);
    assert_eq!(article.review.published_at, Some(at));
}

#[test]
fn test_create_rejects_past_schedule() {
    let (_temp, repo) = repo();
    let storage = repo.open_storage().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();

    let err = create_article(
        &storage,
        NewArticle {
            title: "Kemarin".to_string(),
            author: Some("Rina".to_string()),
            scheduled_for: Some(now - Duration::hours(1)),
            ..NewArticle::default()
        },
        &Config::default(),
        now,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_create_uses_default_author() {
    let (_temp, repo) = repo();
    let storage = repo.open_storage().unwrap();
    let config = Config {
        default_author: Some("Redaksi".to_string()),
        ..Config::default()
    };

    let article = create_article(
        &storage,
        NewArticle {
            title: "Tanpa Nama".to_string(),
            ..NewArticle::default()
        },
        &config,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(article.author, "Redaksi");
}

#[test]
fn test_create_requires_author() {
    let (_temp, repo) = repo();
    let storage = repo.open_storage().unwrap();
    let err = create_article(
        &storage,
        NewArticle {
            title: "Tanpa Nama".to_string(),
            ..NewArticle::default()
        },
        &Config::default(),
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_same_title_same_second_gets_distinct_ids() {
    let (_temp, repo) = repo();
    let storage = repo.open_storage().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();
    let input = NewArticle {
        title: "Kembar".to_string(),
        author: Some("Rina".to_string()),
        ..NewArticle::default()
    };

    let first = create_article(&storage, input.clone(), &Config::default(), now).unwrap();
    let second = create_article(&storage, input, &Config::default(), now).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(storage.load_all().unwrap().len(), 2);
}
