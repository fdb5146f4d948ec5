//! Wire representation of a task.

use crate::todo::domain::{PersistedTaskData, Task};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// The task shape carried on the wire.
///
/// Timestamps travel as integer epoch seconds. Encoding maps an absent
/// timestamp to `0`; decoding converts both epoch fields into concrete
/// timestamps unconditionally, so a wire `0` becomes 1970-01-01 rather than
/// "absent". The round trip is therefore lossy for never-updated tasks.
/// This asymmetry is deliberate: it is the established wire contract, and
/// fixing it would make `0` un-representable as a legitimate epoch value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTask {
    /// Store-assigned identifier; `0` for a task not yet created.
    #[serde(default)]
    pub id: i64,
    /// Task description text.
    #[serde(default)]
    pub description: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Creation time as epoch seconds; `0` when never set.
    #[serde(default)]
    pub created_at: i64,
    /// Last-update time as epoch seconds; `0` when never updated.
    #[serde(default)]
    pub updated_at: i64,
}

impl WireTask {
    /// Encodes a domain task into its wire shape.
    #[must_use]
    pub fn from_domain(task: &Task) -> Self {
        Self {
            id: task.id(),
            description: task.description().to_owned(),
            completed: task.completed(),
            created_at: task.created_at().map_or(0, |t| t.timestamp()),
            updated_at: task.updated_at().map_or(0, |t| t.timestamp()),
        }
    }

    /// Decodes a wire task into the domain entity.
    ///
    /// Both epoch fields convert unconditionally; an out-of-range epoch
    /// decodes to an absent timestamp.
    #[must_use]
    pub fn into_domain(self) -> Task {
        let Self {
            id,
            description,
            completed,
            created_at,
            updated_at,
        } = self;
        Task::from_persisted(PersistedTaskData {
            id,
            description,
            completed,
            created_at: DateTime::from_timestamp(created_at, 0),
            updated_at: DateTime::from_timestamp(updated_at, 0),
        })
    }
}
