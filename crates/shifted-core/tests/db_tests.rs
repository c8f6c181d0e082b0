use jiff::civil::date;
use rusqlite::Connection;
use shifted_core::{
    models::{NewProject, NewTask, UpdateProjectRequest, UpdateTaskRequest},
    Database, Priority, ProjectFilter, ProjectStatus, TaskFilter, TaskStatus, TrackerError,
};
use tempfile::TempDir;

fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
    (temp_dir, db)
}

fn new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        start_date: Some(date(2024, 7, 1)),
        end_date: Some(date(2024, 9, 30)),
        ..Default::default()
    }
}

fn new_task(project_id: u64, title: &str) -> NewTask {
    NewTask {
        project_id,
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_project_round_trip() {
    let (_temp_dir, mut db) = create_test_db();

    let created = db.create_project(&new_project("Relaunch")).unwrap();
    let loaded = db.get_project(created.id).unwrap().expect("project exists");

    assert_eq!(loaded.title, "Relaunch");
    assert_eq!(loaded.start_date, Some(date(2024, 7, 1)));
    assert_eq!(loaded.end_date, Some(date(2024, 9, 30)));
    assert_eq!(loaded.status, ProjectStatus::Planning);
    assert_eq!(loaded.priority, Priority::Medium);
    assert!(loaded.tasks.is_empty());
}

#[test]
fn test_get_missing_project_is_none() {
    let (_temp_dir, db) = create_test_db();
    assert!(db.get_project(42).unwrap().is_none());
    assert!(db.get_task(42).unwrap().is_none());
}

#[test]
fn test_tasks_ordered_by_start_date_with_undated_last() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();

    let undated = db.add_task(&new_task(project.id, "Undated")).unwrap();
    let late = db
        .add_task(&NewTask {
            start_date: Some(date(2024, 8, 1)),
            ..new_task(project.id, "Late")
        })
        .unwrap();
    let early = db
        .add_task(&NewTask {
            start_date: Some(date(2024, 7, 2)),
            ..new_task(project.id, "Early")
        })
        .unwrap();

    let ids: Vec<u64> = db
        .get_project(project.id)
        .unwrap()
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![early.id, late.id, undated.id]);
}

#[test]
fn test_add_task_to_missing_project() {
    let (_temp_dir, mut db) = create_test_db();
    let err = db.add_task(&new_task(9, "Orphan")).unwrap_err();
    assert!(matches!(err, TrackerError::ProjectNotFound { id: 9 }));
}

#[test]
fn test_add_task_rejects_oversized_duration() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();

    let err = db
        .add_task(&NewTask {
            duration_days: Some(u32::MAX),
            ..new_task(project.id, "Forever")
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "duration_days"));
    assert!(db.list_tasks(project.id, None).unwrap().is_empty());
}

#[test]
fn test_update_task_rejects_oversized_merged_window() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();
    let task = db
        .add_task(&NewTask {
            start_date: Some(date(2024, 7, 1)),
            ..new_task(project.id, "Build")
        })
        .unwrap();

    let err = db
        .update_task(
            task.id,
            &UpdateTaskRequest {
                end_date: Some(Some(date(2099, 12, 31))),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "end_date"));
}

#[test]
fn test_update_project_checks_merged_window() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();

    // Moving only the end before the stored start is rejected
    let err = db
        .update_project(
            project.id,
            &UpdateProjectRequest {
                end_date: Some(Some(date(2024, 6, 1))),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "end_date"));

    // Clearing the start makes the same end valid
    let updated = db
        .update_project(
            project.id,
            &UpdateProjectRequest {
                start_date: Some(None),
                end_date: Some(Some(date(2024, 6, 1))),
                status: Some(ProjectStatus::OnHold),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.start_date, None);
    assert_eq!(updated.end_date, Some(date(2024, 6, 1)));
    assert_eq!(updated.status, ProjectStatus::OnHold);
}

#[test]
fn test_update_missing_records() {
    let (_temp_dir, mut db) = create_test_db();
    assert!(matches!(
        db.update_project(5, &UpdateProjectRequest::default()),
        Err(TrackerError::ProjectNotFound { id: 5 })
    ));
    assert!(matches!(
        db.update_task(6, &UpdateTaskRequest::default()),
        Err(TrackerError::TaskNotFound { id: 6 })
    ));
    assert!(matches!(
        db.delete_task(6),
        Err(TrackerError::TaskNotFound { id: 6 })
    ));
}

#[test]
fn test_update_task_clears_optional_fields() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();
    let task = db
        .add_task(&NewTask {
            assignee: Some("dana".to_string()),
            duration_days: Some(5),
            start_date: Some(date(2024, 7, 3)),
            ..new_task(project.id, "Build")
        })
        .unwrap();

    let updated = db
        .update_task(
            task.id,
            &UpdateTaskRequest {
                assignee: Some(String::new()),
                duration_days: Some(None),
                status: Some(TaskStatus::Review),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.assignee, None);
    assert_eq!(updated.duration_days, None);
    assert_eq!(updated.status, TaskStatus::Review);
    assert_eq!(updated.start_date, Some(date(2024, 7, 3)));
}

#[test]
fn test_list_projects_hides_completed_by_default() {
    let (_temp_dir, mut db) = create_test_db();
    db.create_project(&new_project("Open")).unwrap();
    db.create_project(&NewProject {
        status: ProjectStatus::Completed,
        ..new_project("Shipped")
    })
    .unwrap();

    let visible = db.list_projects(None).unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Open");

    let all = db
        .list_projects(Some(&ProjectFilter {
            include_completed: true,
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(all.len(), 2);

    let completed = db
        .list_projects(Some(&ProjectFilter {
            status: Some(ProjectStatus::Completed),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Shipped");
}

#[test]
fn test_list_projects_counts_tasks() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();
    let done = db.add_task(&new_task(project.id, "Done")).unwrap();
    db.add_task(&new_task(project.id, "Open")).unwrap();
    db.update_task(
        done.id,
        &UpdateTaskRequest {
            status: Some(TaskStatus::Done),
            ..Default::default()
        },
    )
    .unwrap();

    let summaries = db.list_projects(None).unwrap();
    assert_eq!(summaries[0].total_tasks, 2);
    assert_eq!(summaries[0].completed_tasks, 1);
    assert_eq!(summaries[0].pending_tasks, 1);
}

#[test]
fn test_task_filters() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();
    db.add_task(&NewTask {
        assignee: Some("dana".to_string()),
        priority: Priority::High,
        ..new_task(project.id, "Mine")
    })
    .unwrap();
    db.add_task(&new_task(project.id, "Theirs")).unwrap();

    let mine = db
        .list_tasks(
            project.id,
            Some(&TaskFilter {
                assignee: Some("dana".to_string()),
                ..Default::default()
            }),
        )
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].title, "Mine");

    let high = db
        .list_tasks(
            project.id,
            Some(&TaskFilter {
                priority: Some(Priority::High),
                ..Default::default()
            }),
        )
        .unwrap();
    assert_eq!(high.len(), 1);
}

#[test]
fn test_delete_project_cascades_to_tasks() {
    let (_temp_dir, mut db) = create_test_db();
    let project = db.create_project(&new_project("Relaunch")).unwrap();
    let task = db.add_task(&new_task(project.id, "Build")).unwrap();

    let deleted = db.delete_project(project.id).unwrap();
    assert_eq!(deleted.tasks.len(), 1);
    assert!(db.get_task(task.id).unwrap().is_none());
    assert!(matches!(
        db.delete_project(project.id),
        Err(TrackerError::ProjectNotFound { .. })
    ));
}

#[test]
fn test_migration_adds_task_columns_to_old_databases() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("old.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE projects (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, description TEXT, status TEXT NOT NULL DEFAULT 'planning', priority TEXT NOT NULL DEFAULT 'medium', start_date TEXT, end_date TEXT, created_at TEXT NOT NULL, updated_at TEXT NOT NULL);
             CREATE TABLE tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE, title TEXT NOT NULL, description TEXT, status TEXT NOT NULL DEFAULT 'todo', priority TEXT NOT NULL DEFAULT 'medium', start_date TEXT, end_date TEXT, created_at TEXT NOT NULL, updated_at TEXT NOT NULL);",
        )
        .unwrap();
    }

    let mut db = Database::new(&path).unwrap();
    let project = db.create_project(&new_project("Legacy")).unwrap();
    let task = db
        .add_task(&NewTask {
            duration_days: Some(3),
            assignee: Some("lee".to_string()),
            ..new_task(project.id, "Port")
        })
        .unwrap();

    let loaded = db.get_task(task.id).unwrap().unwrap();
    assert_eq!(loaded.duration_days, Some(3));
    assert_eq!(loaded.assignee.as_deref(), Some("lee"));
}
