//! Task aggregate root.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Identifier value a task carries before the store has assigned one.
const UNASSIGNED_ID: i64 = 0;

/// A persisted to-do record.
///
/// The store is the sole source of truth; a `Task` handed to a caller is a
/// snapshot of committed state, not a live reference. The identifier is
/// store-assigned on insertion and immutable thereafter, `created_at` is set
/// exactly once at creation, and `updated_at` stays absent until the first
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: i64,
    description: String,
    completed: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: i64,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Persisted last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied changes for an update.
///
/// An empty `description` means "leave the description unchanged", not
/// "clear the field". `completed` carries no such sentinel: the stored flag
/// is always overwritten with this value, including `false`, so a caller who
/// wants it untouched must resend the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement description; empty leaves the stored one unchanged.
    pub description: String,
    /// Replacement completion flag; always applied.
    pub completed: bool,
}

impl Task {
    /// Creates a task that has not been persisted yet.
    ///
    /// The identifier is left unassigned until the store picks one,
    /// `created_at` is stamped from the clock, and `updated_at` is absent.
    #[must_use]
    pub fn new(description: impl Into<String>, completed: bool, clock: &impl Clock) -> Self {
        Self {
            id: UNASSIGNED_ID,
            description: description.into(),
            completed,
            created_at: Some(clock.utc()),
            updated_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            description,
            completed,
            created_at,
            updated_at,
        } = data;
        Self {
            id,
            description,
            completed,
            created_at,
            updated_at,
        }
    }

    /// Returns the store-assigned identifier, or `0` before insertion.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp, when known.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the last-update timestamp, absent until the first update.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Overwrites the creation timestamp prior to insertion.
    ///
    /// The business layer stamps creation time itself rather than trusting
    /// whatever the wire decoded, so the persisted row reflects server time.
    pub fn stamp_created(&mut self, timestamp: DateTime<Utc>) {
        self.created_at = Some(timestamp);
    }

    /// Merges caller-supplied changes into this task and stamps the update
    /// time.
    ///
    /// A non-empty description replaces the stored one; an empty description
    /// leaves it unchanged. The completion flag is always overwritten.
    pub fn apply_update(&mut self, update: TaskUpdate, timestamp: DateTime<Utc>) {
        let TaskUpdate {
            description,
            completed,
        } = update;
        if !description.is_empty() {
            self.description = description;
        }
        self.completed = completed;
        self.updated_at = Some(timestamp);
    }
}
