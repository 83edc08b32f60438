//! Book entity

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Resource, Violations};
use crate::errors::DomainResult;

/// Earliest accepted publication year
pub const MIN_PUBLISHED_YEAR: i32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

fn check_year(violations: &mut Violations, year: Option<i32>, now: DateTime<Utc>) {
    let Some(year) = year else { return };
    if year < MIN_PUBLISHED_YEAR {
        violations.push(
            "publishedYear",
            format!("publishedYear must be at least {}", MIN_PUBLISHED_YEAR),
        );
    } else if year > now.year() {
        violations.push(
            "publishedYear",
            format!("publishedYear cannot be later than {}", now.year()),
        );
    }
}

impl Entity for Book {
    const NAME: &'static str = "Book";
    const COLLECTION: &'static str = "books";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Book {
    type Draft = BookDraft;
    type Patch = BookPatch;

    fn create(draft: BookDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        let mut violations = Violations::new();
        let title = violations.required("title", draft.title);
        let author = violations.required("author", draft.author);
        check_year(&mut violations, draft.published_year, now);
        violations.finish()?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            author,
            published_year: draft.published_year,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, patch: BookPatch, now: DateTime<Utc>) -> DomainResult<()> {
        let mut violations = Violations::new();
        let title = violations.required_if_present("title", patch.title);
        let author = violations.required_if_present("author", patch.author);
        check_year(&mut violations, patch.published_year, now);
        violations.finish()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if patch.published_year.is_some() {
            self.published_year = patch.published_year;
        }
        self.updated_at = now;
        Ok(())
    }
}
