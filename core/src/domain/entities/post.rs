//! Blog post entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Resource, Violations};
use crate::errors::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

impl Entity for Post {
    const NAME: &'static str = "Post";
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Post {
    type Draft = PostDraft;
    type Patch = PostPatch;

    fn create(draft: PostDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        let mut violations = Violations::new();
        let title = violations.required("title", draft.title);
        let content = violations.required("content", draft.content);
        violations.finish()?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            author: draft.author.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()),
            tags: clean_tags(draft.tags.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) -> DomainResult<()> {
        let mut violations = Violations::new();
        let title = violations.required_if_present("title", patch.title);
        let content = violations.required_if_present("content", patch.content);
        violations.finish()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            let author = author.trim().to_string();
            self.author = (!author.is_empty()).then_some(author);
        }
        if let Some(tags) = patch.tags {
            self.tags = clean_tags(tags);
        }
        self.updated_at = now;
        Ok(())
    }
}
