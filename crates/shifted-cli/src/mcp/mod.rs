//! MCP server implementation for Shifted
//!
//! Exposes projects, tasks and timelines to AI assistants over the Model
//! Context Protocol on stdio.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use shifted_core::{TimelineConfig, Tracker};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{CreateProject, CreateTask, Id, ListProjects, McpResult, ShowTimeline, UpdateTask};

const INSTRUCTIONS: &str = r#"Shifted tracks projects and their tasks and lays them out on a Gantt timeline.

## Core Concepts
- **Projects**: title, status (planning/active/on_hold/completed), priority and an optional start and end date
- **Tasks**: belong to a project; status (todo/in_progress/review/done), priority, assignee, optional start date, deadline and duration in days
- **Timeline**: the project's date range padded on both sides, with one bar per task measured in whole days

## Dates
All dates are YYYY-MM-DD. A task's duration_days wins over its deadline when both are set. A task with only a start date is drawn two days wide.

## Workflow
1. `create_project` with a title and dates
2. `add_task` for each piece of work
3. `update_task` as work progresses
4. `show_timeline` to see the schedule; the second content item is the layout as JSON

## Tool Categories
- **Projects**: list_projects, show_project, create_project
- **Tasks**: add_task, update_task
- **Timeline**: show_timeline"#;

/// MCP server for Shifted
#[derive(Clone)]
pub struct ShiftedMcpServer {
    tracker: Arc<Mutex<Tracker>>,
    timeline_config: TimelineConfig,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ShiftedMcpServer {
    pub fn new(tracker: Tracker, timeline_config: TimelineConfig) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            timeline_config,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone(), self.timeline_config)
    }

    #[tool(
        name = "list_projects",
        description = "List projects with their status, priority, schedule and task progress. Completed projects are hidden unless all=true. Use title to filter by a substring of the project title."
    )]
    async fn list_projects(&self, params: Parameters<ListProjects>) -> McpResult {
        self.handlers().list_projects(params).await
    }

    #[tool(
        name = "show_project",
        description = "Show one project with all of its tasks, including each task's status, priority, assignee, schedule and duration."
    )]
    async fn show_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_project(params).await
    }

    #[tool(
        name = "create_project",
        description = "Create a project. Title is required. Optional: description, status ('planning' by default), priority ('medium' by default), start_date and end_date as YYYY-MM-DD. The end date may not be before the start date."
    )]
    async fn create_project(&self, params: Parameters<CreateProject>) -> McpResult {
        self.handlers().create_project(params).await
    }

    #[tool(
        name = "add_task",
        description = "Add a task to a project. Requires project_id and title. Optional: description, priority, assignee, start_date and end_date (deadline) as YYYY-MM-DD, and duration_days (at least 1). New tasks start as 'todo'."
    )]
    async fn add_task(&self, params: Parameters<CreateTask>) -> McpResult {
        self.handlers().add_task(params).await
    }

    #[tool(
        name = "update_task",
        description = "Update a task by ID. Any of title, description, status ('todo', 'in_progress', 'review', 'done'), priority, assignee, start_date, end_date and duration_days may be given. Use 'none' to clear a date, an empty string to clear text, and duration_days=0 to clear the duration. Returns the list of changed fields."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        self.handlers().update_task(params).await
    }

    #[tool(
        name = "show_timeline",
        description = "Lay out a project's Gantt timeline. Returns a text chart and the layout as JSON: date range, total days, month and day markers, and offset/width in days for the project bar and every task bar. Optional today (YYYY-MM-DD) anchors projects that have no dates."
    )]
    async fn show_timeline(&self, params: Parameters<ShowTimeline>) -> McpResult {
        self.handlers().show_timeline(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ShiftedMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "shifted".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ShiftedMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Shifted MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use shifted_core::TrackerBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_tools() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        let server = ShiftedMcpServer::new(tracker, TimelineConfig::default());

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "add_task",
                "create_project",
                "list_projects",
                "show_project",
                "show_timeline",
                "update_task"
            ]
        );
        assert!(server.get_info().instructions.is_some());
    }
}
