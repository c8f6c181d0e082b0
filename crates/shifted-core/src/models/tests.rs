use jiff::{civil::date, Timestamp};

use crate::models::{
    Priority, Project, ProjectStatus, ProjectSummary, Task, TaskStatus, UpdateProjectRequest,
    UpdateTaskRequest,
};

fn create_test_task(id: u64, status: TaskStatus) -> Task {
    Task {
        id,
        project_id: 7,
        title: format!("Task {id}"),
        description: Some("Sketch the landing page".to_string()),
        status,
        priority: Priority::High,
        assignee: Some("dana".to_string()),
        start_date: Some(date(2024, 7, 5)),
        end_date: Some(date(2024, 7, 15)),
        duration_days: None,
        created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
    }
}

fn create_test_project(tasks: Vec<Task>) -> Project {
    Project {
        id: 7,
        title: "Website relaunch".to_string(),
        description: Some("Move the marketing site to the new stack".to_string()),
        status: ProjectStatus::Active,
        priority: Priority::Urgent,
        start_date: Some(date(2024, 7, 1)),
        end_date: None,
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1641081600).unwrap(),
        tasks,
    }
}

#[test]
fn test_project_display_lists_tasks() {
    let project = create_test_project(vec![
        create_test_task(1, TaskStatus::Done),
        create_test_task(2, TaskStatus::Todo),
    ]);
    let output = project.to_string();

    assert!(output.starts_with("# 7. Website relaunch\n"));
    assert!(output.contains("- Status: active"));
    assert!(output.contains("- Priority: urgent"));
    assert!(output.contains("- Schedule: from 2024-07-01"));
    assert!(output.contains("## Tasks"));
    assert!(output.contains("### 1. Task 1 (✓ Done)"));
    assert!(output.contains("### 2. Task 2 (○ Todo)"));
}

#[test]
fn test_project_display_without_tasks() {
    let output = create_test_project(vec![]).to_string();
    assert!(output.contains("No tasks in this project."));
    assert!(!output.contains("## Tasks"));
}

#[test]
fn test_task_display_optional_fields() {
    let mut task = create_test_task(3, TaskStatus::InProgress);
    task.duration_days = Some(1);
    let output = task.to_string();
    assert!(output.contains("- Assignee: dana"));
    assert!(output.contains("- Schedule: 2024-07-05 → 2024-07-15"));
    assert!(output.contains("- Duration: 1 day\n"));

    task.assignee = None;
    task.duration_days = None;
    let output = task.to_string();
    assert!(!output.contains("Assignee"));
    assert!(!output.contains("Duration"));
}

#[test]
fn test_summary_counts_and_progress() {
    let project = create_test_project(vec![
        create_test_task(1, TaskStatus::Done),
        create_test_task(2, TaskStatus::Review),
        create_test_task(3, TaskStatus::Todo),
    ]);
    let summary = ProjectSummary::from(&project);

    assert_eq!(summary.total_tasks, 3);
    assert_eq!(summary.completed_tasks, 1);
    assert_eq!(summary.pending_tasks, 2);
    assert_eq!(summary.progress_percent(), Some(33));
    assert!(summary.to_string().contains("(1/3, 33%)"));
}

#[test]
fn test_summary_without_tasks_has_no_progress() {
    let summary = ProjectSummary::from(&create_test_project(vec![]));
    assert_eq!(summary.progress_percent(), None);
    assert!(summary.to_string().starts_with("## Website relaunch (ID: 7)\n"));
}

#[test]
fn test_changed_fields() {
    let request = UpdateProjectRequest {
        status: Some(ProjectStatus::OnHold),
        end_date: Some(None),
        ..Default::default()
    };
    assert_eq!(
        request.changed_fields(),
        vec!["status -> on_hold".to_string(), "end date cleared".to_string()]
    );

    let request = UpdateTaskRequest {
        duration_days: Some(Some(4)),
        ..Default::default()
    };
    assert_eq!(request.changed_fields(), vec!["duration -> 4 days".to_string()]);
    assert!(UpdateTaskRequest::default().changed_fields().is_empty());
}

#[test]
fn test_status_round_trip_through_strings() {
    for status in [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ] {
        assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
    }
    assert_eq!("on_hold".parse::<ProjectStatus>(), Ok(ProjectStatus::OnHold));
    assert!("archived".parse::<ProjectStatus>().is_err());
    assert!(Priority::Urgent > Priority::Low);
}

#[test]
fn test_task_serialization_skips_empty_optionals() {
    let mut task = create_test_task(4, TaskStatus::Todo);
    task.assignee = None;
    let json = serde_json::to_value(&task).unwrap();
    assert!(json.get("assignee").is_none());
    assert!(json.get("duration_days").is_none());
    assert_eq!(json["start_date"], "2024-07-05");
    assert_eq!(json["status"], "todo");
}
