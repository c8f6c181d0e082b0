//! Request types for updating models.
//!
//! Date fields use `Option<Option<Date>>`: the outer `None` leaves the stored
//! value untouched, `Some(None)` clears it.

use jiff::civil::Date;

use super::{Priority, ProjectStatus, TaskStatus};

/// Validated changes to apply to a project.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub start_date: Option<Option<Date>>,
    pub end_date: Option<Option<Date>>,
}

impl UpdateProjectRequest {
    /// Names of the fields this request changes, for update summaries.
    pub fn changed_fields(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("title".to_string());
        }
        if self.description.is_some() {
            changes.push("description".to_string());
        }
        if let Some(status) = self.status {
            changes.push(format!("status -> {}", status.as_str()));
        }
        if let Some(priority) = self.priority {
            changes.push(format!("priority -> {}", priority.as_str()));
        }
        push_date_change(&mut changes, "start date", self.start_date);
        push_date_change(&mut changes, "end date", self.end_date);
        changes
    }
}

/// Validated changes to apply to a task.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub start_date: Option<Option<Date>>,
    pub end_date: Option<Option<Date>>,
    pub duration_days: Option<Option<u32>>,
}

impl UpdateTaskRequest {
    /// Names of the fields this request changes, for update summaries.
    pub fn changed_fields(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("title".to_string());
        }
        if self.description.is_some() {
            changes.push("description".to_string());
        }
        if let Some(status) = self.status {
            changes.push(format!("status -> {}", status.as_str()));
        }
        if let Some(priority) = self.priority {
            changes.push(format!("priority -> {}", priority.as_str()));
        }
        if let Some(assignee) = &self.assignee {
            changes.push(format!("assignee -> {assignee}"));
        }
        push_date_change(&mut changes, "start date", self.start_date);
        push_date_change(&mut changes, "deadline", self.end_date);
        match self.duration_days {
            Some(Some(days)) => changes.push(format!("duration -> {days} days")),
            Some(None) => changes.push("duration cleared".to_string()),
            None => {}
        }
        changes
    }
}

fn push_date_change(changes: &mut Vec<String>, label: &str, value: Option<Option<Date>>) {
    match value {
        Some(Some(date)) => changes.push(format!("{label} -> {date}")),
        Some(None) => changes.push(format!("{label} cleared")),
        None => {}
    }
}

/// Validated fields for a new project.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// Validated fields for a new task.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewTask {
    pub project_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub duration_days: Option<u32>,
}
