//! Handler operations that return display wrapper types.

use super::Tracker;
use crate::{
    display::{ProjectSummaries, Tasks, UpdateResult},
    error::Result,
    models::{Project, Task},
    params::{ListProjects, ListTasks, UpdateProject, UpdateTask},
};

impl Tracker {
    /// List projects wrapped for markdown display.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use shifted_core::{params::ListProjects, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let summaries = tracker.list_projects_summary(&ListProjects::default()).await?;
    /// println!("{summaries}");
    /// # Result::<(), shifted_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_projects_summary(&self, params: &ListProjects) -> Result<ProjectSummaries> {
        self.list_projects(params).await.map(ProjectSummaries)
    }

    /// List a project's tasks wrapped for markdown display.
    pub async fn list_tasks_display(&self, params: &ListTasks) -> Result<Tasks> {
        self.list_tasks(params).await.map(Tasks)
    }

    /// Update a project and report which fields changed.
    pub async fn update_project_with_changes(
        &self,
        params: &UpdateProject,
    ) -> Result<UpdateResult<Project>> {
        let changes = params.validate()?.changed_fields();
        let project = self.update_project(params).await?;
        Ok(UpdateResult::with_changes(project, changes))
    }

    /// Update a task and report which fields changed.
    pub async fn update_task_with_changes(
        &self,
        params: &UpdateTask,
    ) -> Result<UpdateResult<Task>> {
        let changes = params.validate()?.changed_fields();
        let task = self.update_task(params).await?;
        Ok(UpdateResult::with_changes(task, changes))
    }
}
