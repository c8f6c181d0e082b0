//! Parameter structures for tracker operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond optional JSON schema generation. They hold
//! raw user input: dates are strings, statuses are strings. Each structure
//! validates itself into the typed request consumed by the tracker, which is
//! where malformed dates are rejected with [`TrackerError::InvalidDate`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   validate()    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

use jiff::civil::{date, Date};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{NewProject, NewTask, TaskFilter, UpdateProjectRequest, UpdateTaskRequest},
    timeline::days_between,
};

/// Keyword accepted by update operations to clear a stored date.
pub const CLEAR_KEYWORD: &str = "none";

/// Earliest date accepted for any date field.
pub const EARLIEST_DATE: Date = date(1970, 1, 1);

/// Latest date accepted for any date field.
pub const LATEST_DATE: Date = date(2099, 12, 31);

/// Longest duration a task may declare, in days.
pub const MAX_DURATION_DAYS: u32 = 3660;

/// Longest start-to-end window a project or task may span, in days.
pub const MAX_WINDOW_DAYS: i64 = 3660;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateProject {
    /// Title of the project (required)
    pub title: String,
    /// Optional detailed description of the project
    pub description: Option<String>,
    /// Initial status ('planning', 'active', 'on_hold', 'completed')
    pub status: Option<String>,
    /// Priority ('low', 'medium', 'high', 'urgent'); defaults to medium
    pub priority: Option<String>,
    /// Start date as YYYY-MM-DD
    pub start_date: Option<String>,
    /// End date as YYYY-MM-DD
    pub end_date: Option<String>,
}

impl CreateProject {
    /// Validate the raw input into a [`NewProject`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shifted_core::params::CreateProject;
    ///
    /// let params = CreateProject {
    ///     title: "Launch".to_string(),
    ///     start_date: Some("2024-07-01".to_string()),
    ///     end_date: Some("2024-06-01".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<NewProject> {
        let title = validate_title(&self.title)?;
        let start_date = parse_optional_date("start_date", self.start_date.as_deref())?;
        let end_date = parse_optional_date("end_date", self.end_date.as_deref())?;
        check_window(start_date, end_date)?;

        Ok(NewProject {
            title,
            description: self.description.clone(),
            status: parse_or_default("status", self.status.as_deref())?,
            priority: parse_or_default("priority", self.priority.as_deref())?,
            start_date,
            end_date,
        })
    }
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListProjects {
    /// Include completed projects
    #[serde(default)]
    pub all: bool,
    /// Only projects whose title contains this text
    #[serde(default)]
    pub title: Option<String>,
}

/// Parameters for updating an existing project.
///
/// Date fields accept `none` to clear the stored date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProject {
    /// Project ID to update (required)
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// New status ('planning', 'active', 'on_hold', 'completed')
    pub status: Option<String>,
    /// New priority ('low', 'medium', 'high', 'urgent')
    pub priority: Option<String>,
    /// New start date as YYYY-MM-DD, or 'none' to clear
    pub start_date: Option<String>,
    /// New end date as YYYY-MM-DD, or 'none' to clear
    pub end_date: Option<String>,
}

impl UpdateProject {
    /// Validate the raw input into an [`UpdateProjectRequest`].
    ///
    /// Whether the resulting window is ordered can only be checked against
    /// the stored project, so that check happens in the database layer.
    pub fn validate(&self) -> Result<UpdateProjectRequest> {
        Ok(UpdateProjectRequest {
            title: self.title.as_deref().map(validate_title).transpose()?,
            description: self.description.clone(),
            status: parse_optional("status", self.status.as_deref())?,
            priority: parse_optional("priority", self.priority.as_deref())?,
            start_date: parse_date_update("start_date", self.start_date.as_deref())?,
            end_date: parse_date_update("end_date", self.end_date.as_deref())?,
        })
    }
}

impl TryFrom<UpdateProject> for UpdateProjectRequest {
    type Error = TrackerError;

    fn try_from(params: UpdateProject) -> Result<Self> {
        params.validate()
    }
}

/// Parameters for permanently deleting a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteProject {
    /// The ID of the project to delete
    pub id: u64,
    /// Confirmation flag; deletion is refused without it
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a task to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTask {
    /// ID of the project to add the task to
    pub project_id: u64,
    /// Title of the task (required)
    pub title: String,
    pub description: Option<String>,
    /// Priority ('low', 'medium', 'high', 'urgent'); defaults to medium
    pub priority: Option<String>,
    /// Person responsible for the task
    pub assignee: Option<String>,
    /// Start date as YYYY-MM-DD
    pub start_date: Option<String>,
    /// Deadline as YYYY-MM-DD
    pub end_date: Option<String>,
    /// Planned length in days (must be positive)
    pub duration_days: Option<u32>,
}

impl CreateTask {
    /// Validate the raw input into a [`NewTask`].
    pub fn validate(&self) -> Result<NewTask> {
        let title = validate_title(&self.title)?;
        let start_date = parse_optional_date("start_date", self.start_date.as_deref())?;
        let end_date = parse_optional_date("end_date", self.end_date.as_deref())?;
        check_window(start_date, end_date)?;
        check_duration(self.duration_days)?;

        Ok(NewTask {
            project_id: self.project_id,
            title,
            description: self.description.clone(),
            priority: parse_or_default("priority", self.priority.as_deref())?,
            assignee: self.assignee.clone(),
            start_date,
            end_date,
            duration_days: self.duration_days,
        })
    }
}

/// Parameters for listing the tasks of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    pub project_id: u64,
    /// Only tasks with this status
    #[serde(default)]
    pub status: Option<String>,
    /// Only tasks with this priority
    #[serde(default)]
    pub priority: Option<String>,
    /// Only tasks assigned to this person
    #[serde(default)]
    pub assignee: Option<String>,
}

impl ListTasks {
    /// Validate the raw filter values into a [`TaskFilter`].
    pub fn filter(&self) -> Result<TaskFilter> {
        Ok(TaskFilter {
            status: parse_optional("status", self.status.as_deref())?,
            priority: parse_optional("priority", self.priority.as_deref())?,
            assignee: self.assignee.clone(),
        })
    }
}

/// Parameters for updating an existing task.
///
/// Date fields accept `none` to clear the stored date; a duration of 0
/// clears the stored duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// New status ('todo', 'in_progress', 'review', 'done')
    pub status: Option<String>,
    /// New priority ('low', 'medium', 'high', 'urgent')
    pub priority: Option<String>,
    pub assignee: Option<String>,
    /// New start date as YYYY-MM-DD, or 'none' to clear
    pub start_date: Option<String>,
    /// New deadline as YYYY-MM-DD, or 'none' to clear
    pub end_date: Option<String>,
    /// New duration in days, 0 to clear
    pub duration_days: Option<u32>,
}

impl UpdateTask {
    /// Validate the raw input into an [`UpdateTaskRequest`].
    pub fn validate(&self) -> Result<UpdateTaskRequest> {
        Ok(UpdateTaskRequest {
            title: self.title.as_deref().map(validate_title).transpose()?,
            description: self.description.clone(),
            status: parse_optional("status", self.status.as_deref())?,
            priority: parse_optional("priority", self.priority.as_deref())?,
            assignee: self.assignee.clone(),
            start_date: parse_date_update("start_date", self.start_date.as_deref())?,
            end_date: parse_date_update("end_date", self.end_date.as_deref())?,
            duration_days: match self.duration_days {
                Some(0) => Some(None),
                days => check_duration(days)?.map(Some),
            },
        })
    }
}

impl TryFrom<UpdateTask> for UpdateTaskRequest {
    type Error = TrackerError;

    fn try_from(params: UpdateTask) -> Result<Self> {
        params.validate()
    }
}

/// Parameters for laying out a project's timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowTimeline {
    pub project_id: u64,
    /// Reference date (YYYY-MM-DD) used when the project has no dates;
    /// defaults to the current local date
    #[serde(default)]
    pub today: Option<String>,
}

impl ShowTimeline {
    /// Parse the optional reference date.
    pub fn today(&self) -> Result<Option<Date>> {
        parse_optional_date("today", self.today.as_deref())
    }
}

/// Parse a `YYYY-MM-DD` string into a civil date.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidDate`] naming `field` when the string is not
/// a valid calendar date, and [`TrackerError::InvalidInput`] when the date lies
/// outside [`EARLIEST_DATE`]..=[`LATEST_DATE`].
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    let parsed = value
        .trim()
        .parse::<Date>()
        .map_err(|_| TrackerError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })?;

    if !(EARLIEST_DATE..=LATEST_DATE).contains(&parsed) {
        return Err(TrackerError::invalid_input(field).with_reason(format!(
            "Date {parsed} is outside {EARLIEST_DATE} to {LATEST_DATE}"
        )));
    }
    Ok(parsed)
}

fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    value.map(|v| parse_date(field, v)).transpose()
}

/// Parse a date for an update: `None` keeps, `none`/empty clears.
fn parse_date_update(field: &str, value: Option<&str>) -> Result<Option<Option<Date>>> {
    match value.map(str::trim) {
        None => Ok(None),
        Some(v) if v.is_empty() || v.eq_ignore_ascii_case(CLEAR_KEYWORD) => Ok(Some(None)),
        Some(v) => parse_date(field, v).map(|date| Some(Some(date))),
    }
}

/// Reject a window whose end precedes its start or that spans more than
/// [`MAX_WINDOW_DAYS`].
pub(crate) fn check_window(start: Option<Date>, end: Option<Date>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(TrackerError::invalid_input("end_date")
            .with_reason(format!("End date {end} is before start date {start}"))),
        (Some(start), Some(end)) if days_between(start, end) > MAX_WINDOW_DAYS => {
            Err(TrackerError::invalid_input("end_date").with_reason(format!(
                "Window from {start} to {end} is longer than {MAX_WINDOW_DAYS} days"
            )))
        }
        _ => Ok(()),
    }
}

/// Reject a duration of zero or one above [`MAX_DURATION_DAYS`].
pub(crate) fn check_duration(days: Option<u32>) -> Result<Option<u32>> {
    match days {
        Some(0) => Err(TrackerError::invalid_input("duration_days")
            .with_reason("Duration must be at least one day")),
        Some(days) if days > MAX_DURATION_DAYS => Err(TrackerError::invalid_input("duration_days")
            .with_reason(format!("Duration cannot exceed {MAX_DURATION_DAYS} days"))),
        days => Ok(days),
    }
}

fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_input("title").with_reason("Title cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn parse_optional<T>(field: &str, value: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|reason| TrackerError::invalid_input(field).with_reason(reason))
        })
        .transpose()
}

fn parse_or_default<T>(field: &str, value: Option<&str>) -> Result<T>
where
    T: FromStr<Err = String> + Default,
{
    Ok(parse_optional(field, value)?.unwrap_or_default())
}
