//! Command-line argument wrappers and the command handler.
//!
//! Each clap `Args` struct converts into the matching core parameter type, so
//! the core params stay free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::{fmt, path::Path};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use shifted_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{
        CreateProject, CreateTask, DeleteProject, Id, ListProjects, ListTasks, ShowTimeline,
        UpdateProject, UpdateTask,
    },
    Role, Settings, TimelineConfig, Tracker, TrackerError,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Value enums
// ============================================================================

/// Role accepted by `--role`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Admin,
    Manager,
    Member,
    Viewer,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Admin => Role::Admin,
            RoleArg::Manager => Role::Manager,
            RoleArg::Member => Role::Member,
            RoleArg::Viewer => Role::Viewer,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProjectStatusArg {
    Planning,
    Active,
    #[value(name = "on_hold", alias = "on-hold")]
    OnHold,
    Completed,
}

impl fmt::Display for ProjectStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectStatusArg::Planning => "planning",
            ProjectStatusArg::Active => "active",
            ProjectStatusArg::OnHold => "on_hold",
            ProjectStatusArg::Completed => "completed",
        })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TaskStatusArg {
    Todo,
    #[value(name = "in_progress", alias = "in-progress")]
    InProgress,
    Review,
    Done,
}

impl fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatusArg::Todo => "todo",
            TaskStatusArg::InProgress => "in_progress",
            TaskStatusArg::Review => "review",
            TaskStatusArg::Done => "done",
        })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriorityArg::Low => "low",
            PriorityArg::Medium => "medium",
            PriorityArg::High => "high",
            PriorityArg::Urgent => "urgent",
        })
    }
}

// ============================================================================
// Project commands
// ============================================================================

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Title of the project
    pub title: String,
    #[arg(short, long, help = "Longer description of the project")]
    pub description: Option<String>,
    #[arg(short, long, value_enum, help = "Initial status (defaults to planning)")]
    pub status: Option<ProjectStatusArg>,
    #[arg(short, long, value_enum, help = "Priority (defaults to medium)")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "Start date as YYYY-MM-DD")]
    pub start: Option<String>,
    #[arg(long, help = "End date as YYYY-MM-DD")]
    pub end: Option<String>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            title: val.title,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            start_date: val.start,
            end_date: val.end,
        }
    }
}

/// List projects
///
/// Completed projects are hidden unless `--all` is given.
#[derive(Args)]
pub struct ListProjectsArgs {
    #[arg(short, long, help = "Include completed projects")]
    pub all: bool,
    #[arg(short, long, help = "Only projects whose title contains this text")]
    pub title: Option<String>,
}

impl From<ListProjectsArgs> for ListProjects {
    fn from(val: ListProjectsArgs) -> Self {
        ListProjects {
            all: val.all,
            title: val.title,
        }
    }
}

/// Show a project with all of its tasks
#[derive(Args)]
pub struct ShowProjectArgs {
    #[arg(help = "ID of the project to show")]
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a project's details or schedule
#[derive(Args)]
pub struct UpdateProjectArgs {
    #[arg(help = "ID of the project to update")]
    pub id: u64,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description (empty to clear)")]
    pub description: Option<String>,
    #[arg(short, long, value_enum, help = "New status")]
    pub status: Option<ProjectStatusArg>,
    #[arg(short, long, value_enum, help = "New priority")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "New start date as YYYY-MM-DD, or 'none' to clear")]
    pub start: Option<String>,
    #[arg(long, help = "New end date as YYYY-MM-DD, or 'none' to clear")]
    pub end: Option<String>,
}

impl From<UpdateProjectArgs> for UpdateProject {
    fn from(val: UpdateProjectArgs) -> Self {
        UpdateProject {
            id: val.id,
            title: val.title,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            start_date: val.start,
            end_date: val.end,
        }
    }
}

/// Permanently delete a project and all of its tasks
#[derive(Args)]
pub struct DeleteProjectArgs {
    #[arg(help = "ID of the project to delete")]
    pub id: u64,
    #[arg(long, help = "Confirm permanent deletion")]
    pub confirm: bool,
}

impl From<DeleteProjectArgs> for DeleteProject {
    fn from(val: DeleteProjectArgs) -> Self {
        DeleteProject {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List projects
    #[command(alias = "l")]
    List(ListProjectsArgs),
    /// Show a project with its tasks
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Update a project
    #[command(alias = "u")]
    Update(UpdateProjectArgs),
    /// Permanently delete a project
    Delete(DeleteProjectArgs),
}

// ============================================================================
// Task commands
// ============================================================================

/// Add a task to a project
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "ID of the project to add the task to")]
    pub project_id: u64,
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Longer description of the task")]
    pub description: Option<String>,
    #[arg(short, long, value_enum, help = "Priority (defaults to medium)")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, help = "Person responsible for the task")]
    pub assignee: Option<String>,
    #[arg(long, help = "Start date as YYYY-MM-DD")]
    pub start: Option<String>,
    #[arg(long, help = "Deadline as YYYY-MM-DD")]
    pub end: Option<String>,
    #[arg(long, help = "Planned length in days; overrides the deadline on the timeline")]
    pub duration: Option<u32>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            project_id: val.project_id,
            title: val.title,
            description: val.description,
            priority: val.priority.map(|p| p.to_string()),
            assignee: val.assignee,
            start_date: val.start,
            end_date: val.end,
            duration_days: val.duration,
        }
    }
}

/// List the tasks of a project
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(help = "ID of the project")]
    pub project_id: u64,
    #[arg(short, long, value_enum, help = "Only tasks with this status")]
    pub status: Option<TaskStatusArg>,
    #[arg(short, long, value_enum, help = "Only tasks with this priority")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, help = "Only tasks assigned to this person")]
    pub assignee: Option<String>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            project_id: val.project_id,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            assignee: val.assignee,
        }
    }
}

/// Show a single task or delete it
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "ID of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a task's status, details or schedule
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "ID of the task to update")]
    pub id: u64,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description (empty to clear)")]
    pub description: Option<String>,
    #[arg(short, long, value_enum, help = "New status")]
    pub status: Option<TaskStatusArg>,
    #[arg(short, long, value_enum, help = "New priority")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, help = "New assignee (empty to clear)")]
    pub assignee: Option<String>,
    #[arg(long, help = "New start date as YYYY-MM-DD, or 'none' to clear")]
    pub start: Option<String>,
    #[arg(long, help = "New deadline as YYYY-MM-DD, or 'none' to clear")]
    pub end: Option<String>,
    #[arg(long, help = "New duration in days, 0 to clear")]
    pub duration: Option<u32>,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            assignee: val.assignee,
            start_date: val.start,
            end_date: val.end,
            duration_days: val.duration,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a project
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List the tasks of a project
    #[command(alias = "l")]
    List(ListTasksArgs),
    /// Show a single task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Update a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Permanently delete a task
    Delete(TaskIdArgs),
}

// ============================================================================
// Timeline and config commands
// ============================================================================

/// Lay out a project's Gantt timeline
#[derive(Args)]
pub struct TimelineArgs {
    #[arg(help = "ID of the project")]
    pub project_id: u64,
    #[arg(long, help = "Reference date (YYYY-MM-DD) for projects without dates")]
    pub today: Option<String>,
    #[arg(long, help = "Print the layout as JSON instead of a chart")]
    pub json: bool,
}

impl From<&TimelineArgs> for ShowTimeline {
    fn from(val: &TimelineArgs) -> Self {
        ShowTimeline {
            project_id: val.project_id,
            today: val.today.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current settings
    Show,
    /// Change one setting, e.g. `timeline.padding_days 5`
    Set {
        /// Dotted setting key
        key: String,
        /// New value
        value: String,
    },
}

// ============================================================================
// Handler
// ============================================================================

/// Runs tracker commands and renders their markdown output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    timeline_config: TimelineConfig,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, timeline_config: TimelineConfig) -> Self {
        Self {
            tracker,
            renderer,
            timeline_config,
        }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self
                    .tracker
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer
                    .render(&CreateResult::new(project).to_string())
            }
            ProjectCommands::List(args) => self.list_projects(&args.into()).await,
            ProjectCommands::Show(args) => {
                let id = args.id;
                let project = self
                    .tracker
                    .get_project(&args.into())
                    .await?
                    .ok_or(TrackerError::ProjectNotFound { id })?;
                self.renderer.render(&project.to_string())
            }
            ProjectCommands::Update(args) => {
                let result = self
                    .tracker
                    .update_project_with_changes(&args.into())
                    .await
                    .context("Failed to update project")?;
                self.renderer.render(&result.to_string())
            }
            ProjectCommands::Delete(args) => {
                let project = self
                    .tracker
                    .delete_project(&args.into())
                    .await
                    .context("Failed to delete project")?;
                self.renderer
                    .render(&DeleteResult::new(project).to_string())
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self
                    .tracker
                    .add_task(&args.into())
                    .await
                    .context("Failed to add task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => {
                let project_id = args.project_id;
                let tasks = self.tracker.list_tasks_display(&args.into()).await?;
                let title = format!("# Tasks of project {project_id}\n\n");
                self.renderer.render(&format!("{title}{tasks}"))
            }
            TaskCommands::Show(args) => {
                let id = args.id;
                let task = self
                    .tracker
                    .get_task(&args.into())
                    .await?
                    .ok_or(TrackerError::TaskNotFound { id })?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Update(args) => {
                let result = self
                    .tracker
                    .update_task_with_changes(&args.into())
                    .await
                    .context("Failed to update task")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Delete(args) => {
                let task = self
                    .tracker
                    .delete_task(&args.into())
                    .await
                    .context("Failed to delete task")?;
                self.renderer.render(&DeleteResult::new(task).to_string())
            }
        }
    }

    pub async fn show_timeline(&self, args: &TimelineArgs) -> Result<()> {
        let timeline = self
            .tracker
            .show_timeline(&args.into(), &self.timeline_config)
            .await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&timeline)?);
            Ok(())
        } else {
            self.renderer.render(&timeline.to_string())
        }
    }

    pub async fn list_projects(&self, params: &ListProjects) -> Result<()> {
        let summaries = self.tracker.list_projects_summary(params).await?;
        let title = if params.all {
            "# All Projects"
        } else {
            "# Projects"
        };
        self.renderer.render(&format!("{title}\n\n{summaries}"))
    }
}

/// Show or change settings; does not touch the database.
pub fn handle_config_command(
    command: ConfigCommands,
    mut settings: Settings,
    path: &Path,
    renderer: &TerminalRenderer,
) -> Result<()> {
    match command {
        ConfigCommands::Show => renderer.render(&settings.to_string()),
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings
                .save(path)
                .with_context(|| format!("Failed to save settings to {}", path.display()))?;
            debug!("Set {key} = {value}");
            renderer.render(
                &OperationStatus::success(format!("Set {key} to {value}")).to_string(),
            )
        }
    }
}
