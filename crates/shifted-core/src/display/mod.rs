//! Display formatting and result wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! every interface prints the same markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Project, Task, │───▶│ & Result Types  │───▶│    Output       │
//! │  Timeline)      │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `ProjectSummaries`, `Tasks`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: timestamp and schedule formatting
//! - [`timeline`]: the text Gantt chart

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod timeline;

pub use collections::{ProjectSummaries, Tasks};
pub use datetime::{LocalDateTime, Schedule};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
