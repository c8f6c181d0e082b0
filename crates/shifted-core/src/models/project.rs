//! Project model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Priority, ProjectStatus, Task};

/// A project with its schedule window and tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Title of the project
    pub title: String,

    /// Detailed multi-line description of the project
    pub description: Option<String>,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub priority: Priority,

    /// First scheduled day of the project
    pub start_date: Option<Date>,

    /// Last scheduled day of the project
    pub end_date: Option<Date>,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated tasks, ordered by start date
    #[serde(default)]
    pub tasks: Vec<Task>,
}
