//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server also uses.

use std::{path::Path, process::Command};

use shifted_core::{
    params::{CreateProject, CreateTask, ListProjects, ShowTimeline},
    TimelineConfig, Tracker, TrackerBuilder,
};
use tempfile::TempDir;

async fn create_test_tracker() -> (Tracker, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to create tracker");
    (tracker, temp_dir)
}

/// Run a CLI command against the test database and capture stdout
fn run_cli_command(dir: &Path, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_shifted"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(dir.join("test.db"))
        .arg("--config-file")
        .arg(dir.join("settings.json"))
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    assert!(
        output.status.success(),
        "shifted {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

async fn seed(tracker: &Tracker) -> u64 {
    let project = tracker
        .create_project(&CreateProject {
            title: "Website relaunch".to_string(),
            start_date: Some("2024-07-01".to_string()),
            end_date: Some("2024-09-30".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    for (title, start, end, duration) in [
        ("Wireframes", Some("2024-07-05"), Some("2024-07-15"), None),
        ("Build", Some("2024-07-16"), Some("2024-07-20"), Some(15)),
        ("Launch", Some("2024-09-28"), None, None),
        ("Retro", None, None, None),
    ] {
        tracker
            .add_task(&CreateTask {
                project_id: project.id,
                title: title.to_string(),
                start_date: start.map(str::to_string),
                end_date: end.map(str::to_string),
                duration_days: duration,
                ..Default::default()
            })
            .await
            .expect("Failed to add task");
    }

    project.id
}

#[tokio::test]
async fn test_timeline_chart_matches_core_display() {
    let (tracker, temp_dir) = create_test_tracker().await;
    let project_id = seed(&tracker).await;

    let timeline = tracker
        .show_timeline(
            &ShowTimeline {
                project_id,
                today: None,
            },
            &TimelineConfig::default(),
        )
        .await
        .expect("Failed to lay out timeline");

    let cli_output = run_cli_command(temp_dir.path(), &["timeline", &project_id.to_string()]);
    assert_eq!(cli_output, timeline.to_string());
}

#[tokio::test]
async fn test_timeline_json_matches_core_layout() {
    let (tracker, temp_dir) = create_test_tracker().await;
    let project_id = seed(&tracker).await;

    let timeline = tracker
        .show_timeline(
            &ShowTimeline {
                project_id,
                today: None,
            },
            &TimelineConfig::default(),
        )
        .await
        .expect("Failed to lay out timeline");

    let cli_output = run_cli_command(
        temp_dir.path(),
        &["timeline", &project_id.to_string(), "--json"],
    );
    let parsed: shifted_core::Timeline =
        serde_json::from_str(&cli_output).expect("CLI output is not a timeline");
    assert_eq!(parsed, timeline);

    let widths: Vec<i64> = parsed
        .task_bars
        .iter()
        .map(|bar| bar.geometry.width_days)
        .collect();
    // Duration wins over the deadline; start-only and undated tasks get the
    // default width
    assert_eq!(widths, vec![11, 15, 2, 2]);
}

#[tokio::test]
async fn test_project_list_matches_core_display() {
    let (tracker, temp_dir) = create_test_tracker().await;
    seed(&tracker).await;

    let summaries = tracker
        .list_projects_summary(&ListProjects::default())
        .await
        .expect("Failed to list projects");

    let cli_output = run_cli_command(temp_dir.path(), &[]);
    assert_eq!(cli_output, format!("# Projects\n\n{summaries}"));
    assert!(cli_output.contains("(0/4, 0%)"));
}
