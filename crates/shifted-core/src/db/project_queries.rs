//! Project CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{date_column, date_text, enum_column, merge_text, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{
        NewProject, Project, ProjectFilter, ProjectStatus, ProjectSummary, UpdateProjectRequest,
    },
    params::check_window,
};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (title, description, status, priority, start_date, end_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_PROJECT_SQL: &str = "SELECT id, title, description, status, priority, start_date, end_date, created_at, updated_at FROM projects WHERE id = ?1";
const UPDATE_PROJECT_SQL: &str = "UPDATE projects SET title = ?1, description = ?2, status = ?3, priority = ?4, start_date = ?5, end_date = ?6, updated_at = ?7 WHERE id = ?8";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

const PROJECT_SUMMARY_COLUMNS: &str = "id, title, description, status, priority, start_date, end_date, created_at, updated_at, total_tasks, completed_tasks";

fn build_project_from_row(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        status: enum_column(row, 3)?,
        priority: enum_column(row, 4)?,
        start_date: date_column(row, 5)?,
        end_date: date_column(row, 6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
        tasks: Vec::new(),
    })
}

fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<ProjectSummary> {
    let total_tasks = row.get::<_, i64>(9)? as u32;
    let completed_tasks = row.get::<_, i64>(10)? as u32;

    Ok(ProjectSummary {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        status: enum_column(row, 3)?,
        priority: enum_column(row, 4)?,
        start_date: date_column(row, 5)?,
        end_date: date_column(row, 6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks.saturating_sub(completed_tasks),
    })
}

/// Fetch a project row without its tasks.
fn select_project(connection: &Connection, id: u64) -> Result<Option<Project>> {
    connection
        .query_row(SELECT_PROJECT_SQL, params![id as i64], build_project_from_row)
        .optional()
        .db_context("Failed to query project")
}

impl super::Database {
    /// Creates a new project.
    pub fn create_project(&mut self, new: &NewProject) -> Result<Project> {
        check_window(new.start_date, new.end_date)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                &new.title,
                new.description.as_deref(),
                new.status.as_str(),
                new.priority.as_str(),
                date_text(new.start_date),
                date_text(new.end_date),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert project")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Project {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            status: new.status,
            priority: new.priority,
            start_date: new.start_date,
            end_date: new.end_date,
            created_at: now,
            updated_at: now,
            tasks: Vec::new(),
        })
    }

    /// Retrieves a project by its ID, with its tasks eagerly loaded.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        let mut project = select_project(&self.connection, id)?;

        if let Some(ref mut project) = project {
            project.tasks = self.get_tasks(project.id, None)?;
        }

        Ok(project)
    }

    /// Lists project summaries, ordered by start date with undated projects
    /// last.
    ///
    /// Completed projects are hidden unless the filter asks for them or
    /// requests a specific status.
    pub fn list_projects(&self, filter: Option<&ProjectFilter>) -> Result<Vec<ProjectSummary>> {
        let mut query = format!("SELECT {PROJECT_SUMMARY_COLUMNS} FROM project_summaries");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        let default_filter = ProjectFilter::default();
        let filter = filter.unwrap_or(&default_filter);

        if let Some(ref title) = filter.title_contains {
            conditions.push("title LIKE ?");
            params_vec.push(Box::new(format!("%{title}%")));
        }

        match filter.status {
            Some(status) => {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str()));
            }
            None if !filter.include_completed => {
                conditions.push("status != ?");
                params_vec.push(Box::new(ProjectStatus::Completed.as_str()));
            }
            None => {}
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY start_date IS NULL, start_date, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], build_summary_from_row)
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch projects")?;

        Ok(summaries)
    }

    /// Applies `request` to a project and returns the updated project.
    ///
    /// The merged start/end window is validated against the stored values,
    /// so moving only one end of the window can still be rejected.
    pub fn update_project(&mut self, id: u64, request: &UpdateProjectRequest) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = select_project(&tx, id)?.ok_or(TrackerError::ProjectNotFound { id })?;

        let title = request.title.clone().unwrap_or(current.title);
        let description = merge_text(request.description.as_ref(), current.description);
        let status = request.status.unwrap_or(current.status);
        let priority = request.priority.unwrap_or(current.priority);
        let start_date = request.start_date.unwrap_or(current.start_date);
        let end_date = request.end_date.unwrap_or(current.end_date);

        check_window(start_date, end_date)?;

        tx.execute(
            UPDATE_PROJECT_SQL,
            params![
                &title,
                description.as_deref(),
                status.as_str(),
                priority.as_str(),
                date_text(start_date),
                date_text(end_date),
                Timestamp::now().to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update project")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_project(id)?
            .ok_or(TrackerError::ProjectNotFound { id })
    }

    /// Permanently deletes a project and, through the foreign key cascade,
    /// all of its tasks. Returns the project as it was before deletion.
    pub fn delete_project(&mut self, id: u64) -> Result<Project> {
        let project = self
            .get_project(id)?
            .ok_or(TrackerError::ProjectNotFound { id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_PROJECT_SQL, params![id as i64])
            .db_context("Failed to delete project")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(project)
    }
}
