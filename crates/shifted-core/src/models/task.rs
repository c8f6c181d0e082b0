//! Task model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// An individual task within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent project
    pub project_id: u64,

    /// Brief title/summary of the task
    pub title: String,

    /// Detailed multi-line description of the task
    pub description: Option<String>,

    /// Current status of the task
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    /// Person the task is assigned to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    pub start_date: Option<Date>,

    /// Deadline of the task (inclusive)
    pub end_date: Option<Date>,

    /// Planned length in days; takes precedence over the deadline when
    /// laying out the timeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}
