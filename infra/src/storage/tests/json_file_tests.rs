//! Unit tests for the JSON file repository

use chrono::Utc;
use serde_json::json;
use tempfile::TempDir;

use shelf_core::domain::entities::{Book, BookDraft, Resource, Task, TaskDraft, User};
use shelf_core::errors::{normalize, Fault};
use shelf_core::repositories::Repository;

use crate::storage::JsonFileRepository;

fn book(title: &str) -> Book {
    Book::create(
        BookDraft {
            title: Some(title.to_string()),
            author: Some("Author".to_string()),
            published_year: None,
        },
        Utc::now(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_missing_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    let repo = JsonFileRepository::<Book>::open(&path).await.unwrap();

    assert!(repo.find_all().await.unwrap().is_empty());
    // Opening alone never creates the file
    assert!(!path.exists());
}

#[tokio::test]
async fn test_mutations_are_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    let repo = JsonFileRepository::<Book>::open(&path).await.unwrap();

    let created = repo.insert(book("Dune")).await.unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["title"], "Dune");
    assert_eq!(on_disk[0]["id"], json!(created.id.to_string()));
}

#[tokio::test]
async fn test_collection_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let first = JsonFileRepository::<Task>::open(&path).await.unwrap();
    let task = Task::create(
        TaskDraft {
            title: Some("Persist me".to_string()),
            completed: Some(true),
        },
        Utc::now(),
    )
    .unwrap();
    first.insert(task.clone()).await.unwrap();
    drop(first);

    let reopened = JsonFileRepository::<Task>::open(&path).await.unwrap();
    assert_eq!(reopened.find_all().await.unwrap(), vec![task]);
}

#[tokio::test]
async fn test_update_and_delete_rewrite_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    let repo = JsonFileRepository::<Book>::open(&path).await.unwrap();

    let mut dune = repo.insert(book("Dune")).await.unwrap();
    let keep = repo.insert(book("Emma")).await.unwrap();

    dune.title = "Dune Messiah".to_string();
    repo.update(dune.clone()).await.unwrap();
    assert!(repo.delete(keep.id).await.unwrap());
    assert!(!repo.delete(keep.id).await.unwrap());

    let reopened = JsonFileRepository::<Book>::open(&path).await.unwrap();
    let titles: Vec<String> = reopened
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["Dune Messiah"]);
}

#[tokio::test]
async fn test_duplicate_is_rejected_and_not_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let repo = JsonFileRepository::<User>::open(&path).await.unwrap();

    repo.insert(User::new("alice", "a@b.com", "hash".to_string()))
        .await
        .unwrap();
    let fault = repo
        .insert(User::new("bob", "a@b.com", "hash".to_string()))
        .await
        .unwrap_err();

    assert_eq!(
        normalize(&fault).message(),
        "Duplicate field value: 'a@b.com'. Please use another value!"
    );
    let reopened = JsonFileRepository::<User>::open(&path).await.unwrap();
    assert_eq!(reopened.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_file_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(&path, "{ not json").unwrap();

    let error = JsonFileRepository::<Book>::open(&path).await.err().unwrap();
    let fault = Fault::from(error);
    let normalized = normalize(&fault);
    assert_eq!(normalized.status_code(), 500);
    assert!(!normalized.is_operational());
}

#[tokio::test]
async fn test_concurrent_inserts_are_not_lost() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    let repo = std::sync::Arc::new(JsonFileRepository::<Book>::open(&path).await.unwrap());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.insert(book(&format!("Book {}", i))).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let reopened = JsonFileRepository::<Book>::open(&path).await.unwrap();
    assert_eq!(reopened.find_all().await.unwrap().len(), 10);
}
