//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use shifted_core::{display::CreateResult, params as core, TimelineConfig, Tracker};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================

/// Transparent MCP wrapper for core parameter types.
///
/// Serde passes straight through to the wrapped type and the JSON schema is
/// the wrapped type's schema, so the core params need no rmcp knowledge.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateProject = McpParams<core::CreateProject>;
pub type ListProjects = McpParams<core::ListProjects>;
pub type CreateTask = McpParams<core::CreateTask>;
pub type UpdateTask = McpParams<core::UpdateTask>;
pub type ShowTimeline = McpParams<core::ShowTimeline>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Mutex<Tracker>>,
    timeline_config: TimelineConfig,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<Tracker>>, timeline_config: TimelineConfig) -> Self {
        Self {
            tracker,
            timeline_config,
        }
    }

    pub async fn list_projects(&self, Parameters(params): Parameters<ListProjects>) -> McpResult {
        debug!("list_projects: {params:?}");

        let inner_params = params.as_ref();
        let summaries = self
            .tracker
            .lock()
            .await
            .list_projects_summary(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list projects", &e))?;

        let title = if inner_params.all {
            "All Projects"
        } else {
            "Projects"
        };
        text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_project: {params:?}");

        let id = params.as_ref().id;
        let project = self
            .tracker
            .lock()
            .await
            .get_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get project", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(format!("Project with ID {id} not found"), None)
            })?;

        text_result(project.to_string())
    }

    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProject>,
    ) -> McpResult {
        debug!("create_project: {params:?}");

        let project = self
            .tracker
            .lock()
            .await
            .create_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create project", &e))?;

        text_result(CreateResult::new(project).to_string())
    }

    pub async fn add_task(&self, Parameters(params): Parameters<CreateTask>) -> McpResult {
        debug!("add_task: {params:?}");

        let task = self
            .tracker
            .lock()
            .await
            .add_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add task", &e))?;

        text_result(CreateResult::new(task).to_string())
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .update_task_with_changes(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;

        text_result(result.to_string())
    }

    /// Returns the rendered chart followed by the layout as JSON.
    pub async fn show_timeline(&self, Parameters(params): Parameters<ShowTimeline>) -> McpResult {
        debug!("show_timeline: {params:?}");

        let timeline = self
            .tracker
            .lock()
            .await
            .show_timeline(params.as_ref(), &self.timeline_config)
            .await
            .map_err(|e| to_mcp_error("Failed to lay out timeline", &e))?;

        let json = serde_json::to_string_pretty(&timeline).map_err(|e| {
            ErrorData::internal_error(format!("Failed to serialize timeline: {e}"), None)
        })?;

        Ok(CallToolResult::success(vec![
            Content::text(timeline.to_string()),
            Content::text(json),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use shifted_core::TrackerBuilder;
    use tempfile::TempDir;

    use super::*;

    async fn create_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .expect("Failed to create tracker");
        let handlers = McpHandlers::new(Arc::new(Mutex::new(tracker)), TimelineConfig::default());
        (temp_dir, handlers)
    }

    fn params<T: JsonSchema>(inner: T) -> Parameters<McpParams<T>> {
        Parameters(McpParams(inner))
    }

    #[test]
    fn test_params_deserialize_transparently() {
        let parsed: CreateTask =
            serde_json::from_str(r#"{"project_id": 2, "title": "Copy", "duration_days": 4}"#)
                .unwrap();
        assert_eq!(parsed.as_ref().project_id, 2);
        assert_eq!(parsed.as_ref().duration_days, Some(4));
    }

    #[tokio::test]
    async fn test_create_project_then_timeline() {
        let (_temp_dir, handlers) = create_handlers().await;

        let created = handlers
            .create_project(params(core::CreateProject {
                title: "Website relaunch".to_string(),
                start_date: Some("2024-07-01".to_string()),
                end_date: Some("2024-09-30".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(created.is_error, Some(false));

        let result = handlers
            .show_timeline(params(core::ShowTimeline {
                project_id: 1,
                today: None,
            }))
            .await
            .unwrap();
        assert_eq!(result.content.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_project_is_invalid_params() {
        let (_temp_dir, handlers) = create_handlers().await;

        let err = handlers
            .add_task(params(core::CreateTask {
                project_id: 42,
                title: "Orphan".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);

        let err = handlers.show_project(params(core::Id { id: 42 })).await.unwrap_err();
        assert!(err.message.contains("42"));
    }
}
