//! Data models for projects and tasks.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]; timeline layout for them lives in
//! [`crate::timeline`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use shifted_core::models::{Priority, Project, ProjectStatus};
//!
//! let project = Project {
//!     id: 1,
//!     title: "Website relaunch".to_string(),
//!     description: None,
//!     status: ProjectStatus::Active,
//!     priority: Priority::High,
//!     start_date: Some(date(2024, 7, 1)),
//!     end_date: Some(date(2024, 9, 30)),
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     tasks: vec![],
//! };
//! assert!(project.to_string().contains("# 1. Website relaunch"));
//! ```

pub mod filters;
pub mod project;
pub mod requests;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use filters::{ProjectFilter, TaskFilter};
pub use project::Project;
pub use requests::{NewProject, NewTask, UpdateProjectRequest, UpdateTaskRequest};
pub use status::{Priority, ProjectStatus, TaskStatus};
pub use summary::ProjectSummary;
pub use task::Task;
