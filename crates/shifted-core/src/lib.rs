//! Core library for the Shifted project tracker.
//!
//! Shifted keeps projects and their tasks in a local SQLite database and lays
//! them out on a Gantt timeline. The crate is split into:
//!
//! - [`timeline`]: pure layout engine (date range, bar geometry, axis labels)
//! - [`models`] and [`params`]: domain types and validated user input
//! - [`db`] and [`tracker`]: the record store and its async facade
//! - [`permissions`] and [`settings`]: role checks and persisted settings
//! - [`display`]: markdown output shared by the CLI and the MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use shifted_core::{
//!     params::{CreateProject, ShowTimeline},
//!     timeline::TimelineConfig,
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
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
//! let timeline = tracker
//!     .show_timeline(
//!         &ShowTimeline { project_id: project.id, today: None },
//!         &TimelineConfig::default(),
//!     )
//!     .await?;
//! println!("{timeline}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod permissions;
pub mod settings;
pub mod timeline;
pub mod tracker;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, ProjectSummaries, Tasks, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    Priority, Project, ProjectFilter, ProjectStatus, ProjectSummary, Task, TaskFilter, TaskStatus,
};
pub use permissions::{Action, Role, User};
pub use settings::{Settings, Theme};
pub use timeline::{Timeline, TimelineConfig};
pub use tracker::{Tracker, TrackerBuilder};
