//! Filter types for querying projects and tasks.

use super::{Priority, ProjectStatus, TaskStatus};

/// Filter options for querying projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Filter by project title (case-insensitive partial match)
    pub title_contains: Option<String>,

    pub status: Option<ProjectStatus>,

    /// Hide completed projects unless a status is requested explicitly
    pub include_completed: bool,
}

impl From<&crate::params::ListProjects> for ProjectFilter {
    fn from(params: &crate::params::ListProjects) -> Self {
        Self {
            title_contains: params.title.clone(),
            status: None,
            include_completed: params.all,
        }
    }
}

/// Filter options for querying the tasks of a project.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    /// Exact assignee match
    pub assignee: Option<String>,
}
