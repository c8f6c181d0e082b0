//! Project summary types.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Priority, Project, ProjectStatus, TaskStatus};

/// Summary information about a project with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of tasks marked done
    pub completed_tasks: u32,
    /// Number of tasks not yet done
    pub pending_tasks: u32,
}

impl ProjectSummary {
    /// Share of completed tasks as a whole percentage, `None` without tasks.
    pub fn progress_percent(&self) -> Option<u32> {
        (self.total_tasks > 0).then(|| self.completed_tasks * 100 / self.total_tasks)
    }
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        let total_tasks = project.tasks.len() as u32;
        let completed_tasks = project
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Done)
            .count() as u32;

        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            status: project.status,
            priority: project.priority,
            start_date: project.start_date,
            end_date: project.end_date,
            created_at: project.created_at,
            updated_at: project.updated_at,
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
        }
    }
}
