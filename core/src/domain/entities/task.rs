//! Task entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Resource, Violations};
use crate::errors::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl Entity for Task {
    const NAME: &'static str = "Task";
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn create(draft: TaskDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        let mut violations = Violations::new();
        let title = violations.required("title", draft.title);
        violations.finish()?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            completed: draft.completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) -> DomainResult<()> {
        let mut violations = Violations::new();
        let title = violations.required_if_present("title", patch.title);
        violations.finish()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = now;
        Ok(())
    }
}
