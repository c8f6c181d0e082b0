mod common;

use common::{create_test_tracker, create_test_tracker_as};
use jiff::civil::date;
use shifted_core::{
    params::{
        CreateProject, CreateTask, DeleteProject, Id, ListProjects, ListTasks, ShowTimeline,
        UpdateProject, UpdateTask,
    },
    Role, TaskStatus, TimelineConfig, TrackerError,
};

fn relaunch() -> CreateProject {
    CreateProject {
        title: "Website relaunch".to_string(),
        description: Some("Move the marketing site".to_string()),
        priority: Some("high".to_string()),
        start_date: Some("2024-07-01".to_string()),
        end_date: Some("2024-09-30".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_complete_project_workflow() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let project = tracker
        .create_project(&relaunch())
        .await
        .expect("Failed to create project");

    let design = tracker
        .add_task(&CreateTask {
            project_id: project.id,
            title: "Design".to_string(),
            assignee: Some("dana".to_string()),
            start_date: Some("2024-07-05".to_string()),
            end_date: Some("2024-07-15".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let build = tracker
        .add_task(&CreateTask {
            project_id: project.id,
            title: "Build".to_string(),
            start_date: Some("2024-07-16".to_string()),
            duration_days: Some(20),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    tracker
        .update_task(&UpdateTask {
            id: design.id,
            status: Some("done".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update task");

    let summaries = tracker
        .list_projects_summary(&ListProjects::default())
        .await
        .expect("Failed to list projects");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_tasks, 2);
    assert_eq!(summaries[0].completed_tasks, 1);
    assert!(summaries.to_string().contains("(1/2, 50%)"));

    let timeline = tracker
        .show_timeline(
            &ShowTimeline {
                project_id: project.id,
                today: None,
            },
            &TimelineConfig::default(),
        )
        .await
        .expect("Failed to lay out timeline");

    let bars: Vec<(u64, i64, i64)> = timeline
        .task_bars
        .iter()
        .map(|bar| (bar.task_id, bar.geometry.offset_days, bar.geometry.width_days))
        .collect();
    // Range starts 2024-06-28; the build task runs 20 days from 07-16
    assert_eq!(bars, vec![(design.id, 7, 11), (build.id, 18, 20)]);
    assert_eq!(timeline.task_bars[0].status, TaskStatus::Done);

    let open = tracker
        .list_tasks(&ListTasks {
            project_id: project.id,
            status: Some("todo".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, build.id);

    let deleted = tracker
        .delete_task(&Id { id: build.id })
        .await
        .expect("Failed to delete task");
    assert_eq!(deleted.title, "Build");
}

#[tokio::test]
async fn test_unscheduled_project_uses_reference_date() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let project = tracker
        .create_project(&CreateProject {
            title: "Someday".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let timeline = tracker
        .show_timeline(
            &ShowTimeline {
                project_id: project.id,
                today: Some("2024-03-10".to_string()),
            },
            &TimelineConfig::default(),
        )
        .await
        .unwrap();

    // today .. today + 30, padded by 3 on each side
    assert_eq!(timeline.range.start, date(2024, 3, 7));
    assert_eq!(timeline.range.end, date(2024, 4, 12));
    assert_eq!(timeline.total_days, 36);
}

#[tokio::test]
async fn test_update_project_rejects_bad_dates() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let project = tracker.create_project(&relaunch()).await.unwrap();

    let err = tracker
        .update_project(&UpdateProject {
            id: project.id,
            start_date: Some("2024-02-30".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidDate { ref field, .. } if field == "start_date"));

    let err = tracker
        .update_project(&UpdateProject {
            id: project.id,
            start_date: Some("2024-12-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "end_date"));
}

#[tokio::test]
async fn test_update_project_with_changes() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let project = tracker.create_project(&relaunch()).await.unwrap();

    let result = tracker
        .update_project_with_changes(&UpdateProject {
            id: project.id,
            title: Some("Relaunch v2".to_string()),
            end_date: Some("none".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result.resource.title, "Relaunch v2");
    assert_eq!(result.resource.end_date, None);
    assert_eq!(
        result.changes,
        vec!["title".to_string(), "end date cleared".to_string()]
    );
}

#[tokio::test]
async fn test_member_permissions() {
    let (temp_dir, admin) = create_test_tracker().await;
    let project = admin.create_project(&relaunch()).await.unwrap();

    let member = shifted_core::TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_user(shifted_core::User {
            name: "sam".to_string(),
            role: Role::Member,
        })
        .build()
        .await
        .unwrap();

    let task = member
        .add_task(&CreateTask {
            project_id: project.id,
            title: "Write copy".to_string(),
            ..Default::default()
        })
        .await
        .expect("Members can add tasks");

    assert!(matches!(
        member.delete_task(&Id { id: task.id }).await,
        Err(TrackerError::PermissionDenied { .. })
    ));
    assert!(matches!(
        member
            .update_project(&UpdateProject {
                id: project.id,
                status: Some("active".to_string()),
                ..Default::default()
            })
            .await,
        Err(TrackerError::PermissionDenied { .. })
    ));
}

#[tokio::test]
async fn test_viewer_error_message() {
    let (_temp_dir, viewer) = create_test_tracker_as(Role::Viewer).await;
    let err = viewer
        .delete_project(&DeleteProject {
            id: 1,
            confirmed: true,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Permission denied: role 'viewer' cannot delete projects"
    );
}

#[tokio::test]
async fn test_huge_duration_cannot_stretch_timeline() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let project = tracker.create_project(&relaunch()).await.unwrap();

    let err = tracker
        .add_task(&CreateTask {
            project_id: project.id,
            title: "Forever".to_string(),
            start_date: Some("2024-07-05".to_string()),
            duration_days: Some(u32::MAX),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "duration_days"));

    let task = tracker
        .add_task(&CreateTask {
            project_id: project.id,
            title: "Build".to_string(),
            start_date: Some("2024-07-05".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let err = tracker
        .update_task(&UpdateTask {
            id: task.id,
            duration_days: Some(u32::MAX),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "duration_days"));

    let err = tracker
        .update_task(&UpdateTask {
            id: task.id,
            end_date: Some("9999-12-31".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "end_date"));

    let timeline = tracker
        .show_timeline(
            &ShowTimeline {
                project_id: project.id,
                today: None,
            },
            &TimelineConfig::default(),
        )
        .await
        .unwrap();
    assert_eq!(timeline.range.end, date(2024, 10, 3));
    assert_eq!(timeline.total_days, 97);
    assert_eq!(timeline.days.len(), 97);
    assert_eq!(timeline.pixel_width(), 97 * 30);
}
