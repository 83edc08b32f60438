//! Unit tests for the book schema

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Book, BookDraft, BookPatch, Resource};
use crate::errors::{normalize, Fault};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn messages(fault: Fault) -> Vec<String> {
    match fault {
        Fault::Validation { errors } => errors.into_iter().map(|e| e.message).collect(),
        other => panic!("expected validation fault, got {:?}", other),
    }
}

#[test]
fn test_create_trims_fields() {
    let draft = BookDraft {
        title: Some("  Dune ".to_string()),
        author: Some("Frank Herbert  ".to_string()),
        published_year: Some(1965),
    };

    let book = Book::create(draft, now()).unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.published_year, Some(1965));
    assert_eq!(book.created_at, book.updated_at);
}

#[test]
fn test_missing_fields_are_reported_in_schema_order() {
    let fault = Book::create(BookDraft::default(), now()).unwrap_err();
    assert_eq!(
        normalize(&fault).message(),
        "Invalid input data: title is required. author is required"
    );
    assert_eq!(normalize(&fault).status_code(), 400);
}

#[test]
fn test_blank_title_counts_as_missing() {
    let draft = BookDraft {
        title: Some("   ".to_string()),
        author: Some("Anon".to_string()),
        published_year: None,
    };
    let fault = Book::create(draft, now()).unwrap_err();
    assert_eq!(messages(fault), vec!["title is required"]);
}

#[test]
fn test_published_year_bounds() {
    let early = BookDraft {
        title: Some("Old".to_string()),
        author: Some("Scribe".to_string()),
        published_year: Some(999),
    };
    assert_eq!(
        messages(Book::create(early, now()).unwrap_err()),
        vec!["publishedYear must be at least 1000"]
    );

    let future = BookDraft {
        title: Some("New".to_string()),
        author: Some("Writer".to_string()),
        published_year: Some(2025),
    };
    assert_eq!(
        messages(Book::create(future, now()).unwrap_err()),
        vec!["publishedYear cannot be later than 2024"]
    );
}

#[test]
fn test_patch_updates_only_given_fields() {
    let mut book = Book::create(
        BookDraft {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            published_year: None,
        },
        now(),
    )
    .unwrap();
    let later = now() + chrono::Duration::hours(1);

    book.apply(
        BookPatch {
            published_year: Some(1965),
            ..Default::default()
        },
        later,
    )
    .unwrap();

    assert_eq!(book.title, "Dune");
    assert_eq!(book.published_year, Some(1965));
    assert_eq!(book.updated_at, later);
}

#[test]
fn test_invalid_patch_leaves_book_untouched() {
    let mut book = Book::create(
        BookDraft {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            published_year: None,
        },
        now(),
    )
    .unwrap();
    let before = book.clone();

    let result = book.apply(
        BookPatch {
            title: Some("".to_string()),
            author: Some("Someone".to_string()),
            ..Default::default()
        },
        now(),
    );

    assert!(matches!(result, Err(Fault::Validation { .. })));
    assert_eq!(book, before);
}

#[test]
fn test_serializes_camel_case() {
    let book = Book::create(
        BookDraft {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            published_year: Some(1965),
        },
        now(),
    )
    .unwrap();

    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(value["publishedYear"], 1965);
    assert!(value.get("createdAt").is_some());
    assert!(value.get("published_year").is_none());
}
