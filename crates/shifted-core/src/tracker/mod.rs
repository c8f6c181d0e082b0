//! High-level tracker API for managing projects, tasks and timelines.
//!
//! The [`Tracker`] sits between the interfaces (CLI, MCP) and the record
//! store. It validates raw [`params`](crate::params), checks the acting
//! user's role, and runs each database operation on a blocking thread with a
//! fresh connection.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers)     │───▶│ (project_ops,   │───▶│   (via db/)     │
//! │                 │    │  task_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use shifted_core::{params::{CreateProject, CreateTask}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/shifted-example.db"))
//!     .build()
//!     .await?;
//!
//! let project = tracker
//!     .create_project(&CreateProject {
//!         title: "Website relaunch".to_string(),
//!         start_date: Some("2024-07-01".to_string()),
//!         end_date: Some("2024-09-30".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker
//!     .add_task(&CreateTask {
//!         project_id: project.id,
//!         title: "Wireframes".to_string(),
//!         start_date: Some("2024-07-05".to_string()),
//!         end_date: Some("2024-07-15".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
    permissions::{authorize, Action, User},
};

pub mod builder;
pub mod handlers;
pub mod project_ops;
pub mod task_ops;
pub mod timeline_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing projects and tasks.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    user: User,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, user: User) -> Self {
        Self { db_path, user }
    }

    /// The user on whose behalf operations run.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Fail with `PermissionDenied` unless the current user may perform
    /// `action`.
    pub(crate) fn authorize(&self, action: Action) -> Result<()> {
        if authorize(&self.user, action) {
            Ok(())
        } else {
            log::debug!("Denied '{action}' for role {}", self.user.role);
            Err(TrackerError::PermissionDenied {
                role: self.user.role,
                action,
            })
        }
    }

    /// Run `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
