//! Project operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Project, ProjectFilter, ProjectSummary},
    params::{CreateProject, DeleteProject, Id, ListProjects, UpdateProject},
    permissions::Action,
};

impl Tracker {
    /// Creates a new project.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PermissionDenied` for roles that cannot create
    /// projects, and `InvalidInput`/`InvalidDate` for malformed parameters.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        self.authorize(Action::CreateProject)?;
        let new = params.validate()?;

        let project = self
            .with_database(move |db| db.create_project(&new))
            .await?;
        info!("Created project {} '{}'", project.id, project.title);
        Ok(project)
    }

    /// Retrieves a project with its tasks.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        self.authorize(Action::ViewProjects)?;
        let project_id = params.id;
        self.with_database(move |db| db.get_project(project_id))
            .await
    }

    /// Lists project summaries matching `params`.
    pub async fn list_projects(&self, params: &ListProjects) -> Result<Vec<ProjectSummary>> {
        self.authorize(Action::ViewProjects)?;
        let filter = ProjectFilter::from(params);
        self.with_database(move |db| db.list_projects(Some(&filter)))
            .await
    }

    /// Applies the changes in `params` to an existing project.
    pub async fn update_project(&self, params: &UpdateProject) -> Result<Project> {
        self.authorize(Action::EditProject)?;
        let project_id = params.id;
        let request = params.validate()?;

        let project = self
            .with_database(move |db| db.update_project(project_id, &request))
            .await?;
        info!("Updated project {project_id}");
        Ok(project)
    }

    /// Permanently deletes a project and all of its tasks.
    ///
    /// Requires explicit confirmation via the `confirmed` field. Returns the
    /// deleted project for confirmation output.
    pub async fn delete_project(&self, params: &DeleteProject) -> Result<Project> {
        self.authorize(Action::DeleteProject)?;
        if !params.confirmed {
            return Err(TrackerError::invalid_input("confirmed").with_reason(
                "Project deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let project_id = params.id;
        let project = self
            .with_database(move |db| db.delete_project(project_id))
            .await?;
        info!(
            "Deleted project {project_id} with {} tasks",
            project.tasks.len()
        );
        Ok(project)
    }
}
