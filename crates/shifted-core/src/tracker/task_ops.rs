//! Task operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    error::Result,
    models::Task,
    params::{CreateTask, Id, ListTasks, UpdateTask},
    permissions::Action,
};

impl Tracker {
    /// Adds a task to an existing project.
    pub async fn add_task(&self, params: &CreateTask) -> Result<Task> {
        self.authorize(Action::CreateTask)?;
        let new = params.validate()?;

        let task = self.with_database(move |db| db.add_task(&new)).await?;
        info!(
            "Added task {} to project {}: '{}'",
            task.id, task.project_id, task.title
        );
        Ok(task)
    }

    /// Retrieves a single task.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        self.authorize(Action::ViewProjects)?;
        let task_id = params.id;
        self.with_database(move |db| db.get_task(task_id)).await
    }

    /// Lists the tasks of a project, optionally filtered.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Vec<Task>> {
        self.authorize(Action::ViewProjects)?;
        let project_id = params.project_id;
        let filter = params.filter()?;
        self.with_database(move |db| db.list_tasks(project_id, Some(&filter)))
            .await
    }

    /// Applies the changes in `params` to an existing task.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        self.authorize(Action::EditTask)?;
        let task_id = params.id;
        let request = params.validate()?;

        let task = self
            .with_database(move |db| db.update_task(task_id, &request))
            .await?;
        info!("Updated task {task_id}");
        Ok(task)
    }

    /// Permanently deletes a task, returning it for confirmation output.
    pub async fn delete_task(&self, params: &Id) -> Result<Task> {
        self.authorize(Action::DeleteTask)?;
        let task_id = params.id;

        let task = self.with_database(move |db| db.delete_task(task_id)).await?;
        info!("Deleted task {task_id} from project {}", task.project_id);
        Ok(task)
    }
}
