//! Task CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{date_column, date_text, enum_column, merge_text, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{NewTask, Task, TaskFilter, TaskStatus, UpdateTaskRequest},
    params::{check_duration, check_window},
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (project_id, title, description, status, priority, assignee, start_date, end_date, duration_days, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const SELECT_TASK_SQL: &str = "SELECT id, project_id, title, description, status, priority, assignee, start_date, end_date, duration_days, created_at, updated_at FROM tasks WHERE id = ?1";
const SELECT_TASKS_BASE_SQL: &str = "SELECT id, project_id, title, description, status, priority, assignee, start_date, end_date, duration_days, created_at, updated_at FROM tasks WHERE project_id = ?";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET title = ?1, description = ?2, status = ?3, priority = ?4, assignee = ?5, start_date = ?6, end_date = ?7, duration_days = ?8, updated_at = ?9 WHERE id = ?10";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const UPDATE_PROJECT_TIMESTAMP_SQL: &str = "UPDATE projects SET updated_at = ?1 WHERE id = ?2";

fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        title: row.get(2)?,
        description: row.get(3)?,
        status: enum_column(row, 4)?,
        priority: enum_column(row, 5)?,
        assignee: row.get(6)?,
        start_date: date_column(row, 7)?,
        end_date: date_column(row, 8)?,
        duration_days: row.get(9)?,
        created_at: timestamp_column(row, 10)?,
        updated_at: timestamp_column(row, 11)?,
    })
}

fn select_task(connection: &Connection, id: u64) -> Result<Option<Task>> {
    connection
        .query_row(SELECT_TASK_SQL, params![id as i64], build_task_from_row)
        .optional()
        .db_context("Failed to query task")
}

fn project_exists(connection: &Connection, project_id: u64) -> Result<bool> {
    connection
        .query_row(CHECK_PROJECT_EXISTS_SQL, params![project_id as i64], |row| {
            row.get(0)
        })
        .db_context("Failed to check project existence")
}

impl super::Database {
    /// Adds a task to an existing project.
    pub fn add_task(&mut self, new: &NewTask) -> Result<Task> {
        check_window(new.start_date, new.end_date)?;
        check_duration(new.duration_days)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !project_exists(&tx, new.project_id)? {
            return Err(TrackerError::ProjectNotFound {
                id: new.project_id,
            });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TASK_SQL,
            params![
                new.project_id as i64,
                &new.title,
                new.description.as_deref(),
                TaskStatus::Todo.as_str(),
                new.priority.as_str(),
                new.assignee.as_deref(),
                date_text(new.start_date),
                date_text(new.end_date),
                new.duration_days,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            UPDATE_PROJECT_TIMESTAMP_SQL,
            params![&now_str, new.project_id as i64],
        )
        .db_context("Failed to update project timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            project_id: new.project_id,
            title: new.title.clone(),
            description: new.description.clone(),
            status: TaskStatus::Todo,
            priority: new.priority,
            assignee: new.assignee.clone(),
            start_date: new.start_date,
            end_date: new.end_date,
            duration_days: new.duration_days,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        select_task(&self.connection, id)
    }

    /// Gets the tasks of a project ordered by start date (undated tasks
    /// last), then by ID.
    pub fn get_tasks(&self, project_id: u64, filter: Option<&TaskFilter>) -> Result<Vec<Task>> {
        let mut query = SELECT_TASKS_BASE_SQL.to_string();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(project_id as i64)];

        if let Some(f) = filter {
            if let Some(status) = f.status {
                query.push_str(" AND status = ?");
                params_vec.push(Box::new(status.as_str()));
            }
            if let Some(priority) = f.priority {
                query.push_str(" AND priority = ?");
                params_vec.push(Box::new(priority.as_str()));
            }
            if let Some(ref assignee) = f.assignee {
                query.push_str(" AND assignee = ?");
                params_vec.push(Box::new(assignee.clone()));
            }
        }

        query.push_str(" ORDER BY start_date IS NULL, start_date, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }

    /// Lists the tasks of a project, failing when the project is unknown.
    pub fn list_tasks(&self, project_id: u64, filter: Option<&TaskFilter>) -> Result<Vec<Task>> {
        if !project_exists(&self.connection, project_id)? {
            return Err(TrackerError::ProjectNotFound { id: project_id });
        }
        self.get_tasks(project_id, filter)
    }

    /// Applies `request` to a task and returns the updated task.
    pub fn update_task(&mut self, id: u64, request: &UpdateTaskRequest) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = select_task(&tx, id)?.ok_or(TrackerError::TaskNotFound { id })?;

        let title = request.title.clone().unwrap_or(current.title);
        let description = merge_text(request.description.as_ref(), current.description);
        let status = request.status.unwrap_or(current.status);
        let priority = request.priority.unwrap_or(current.priority);
        let assignee = merge_text(request.assignee.as_ref(), current.assignee);
        let start_date = request.start_date.unwrap_or(current.start_date);
        let end_date = request.end_date.unwrap_or(current.end_date);
        let duration_days = request.duration_days.unwrap_or(current.duration_days);

        check_window(start_date, end_date)?;

        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPDATE_TASK_SQL,
            params![
                &title,
                description.as_deref(),
                status.as_str(),
                priority.as_str(),
                assignee.as_deref(),
                date_text(start_date),
                date_text(end_date),
                duration_days,
                &now_str,
                id as i64
            ],
        )
        .db_context("Failed to update task")?;

        tx.execute(
            UPDATE_PROJECT_TIMESTAMP_SQL,
            params![&now_str, current.project_id as i64],
        )
        .db_context("Failed to update project timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_task(id)?.ok_or(TrackerError::TaskNotFound { id })
    }

    /// Permanently deletes a task. Returns the task as it was before
    /// deletion.
    pub fn delete_task(&mut self, id: u64) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let task = select_task(&tx, id)?.ok_or(TrackerError::TaskNotFound { id })?;

        tx.execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task")?;

        tx.execute(
            UPDATE_PROJECT_TIMESTAMP_SQL,
            params![Timestamp::now().to_string(), task.project_id as i64],
        )
        .db_context("Failed to update project timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(task)
    }
}
