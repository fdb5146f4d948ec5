//! Diesel row models for task persistence.

use super::schema::task;
use crate::todo::domain::{PersistedTaskData, Task};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task description text.
    pub description: String,
    /// Completion flag.
    pub complete: bool,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
///
/// The identifier is omitted so the store assigns it, and `updated_at` is
/// omitted so the column starts out NULL.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task)]
pub struct NewTaskRow {
    /// Task description text.
    pub description: String,
    /// Completion flag.
    pub complete: bool,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl TaskRow {
    /// Converts a stored row into the domain entity.
    #[must_use]
    pub fn into_task(self) -> Task {
        let Self {
            id,
            description,
            complete,
            created_at,
            updated_at,
        } = self;
        Task::from_persisted(PersistedTaskData {
            id,
            description,
            completed: complete,
            created_at,
            updated_at,
        })
    }
}

impl NewTaskRow {
    /// Builds an insert row from a not-yet-persisted task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            description: task.description().to_owned(),
            complete: task.completed(),
            created_at: task.created_at(),
        }
    }
}
