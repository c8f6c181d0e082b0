use shifted_core::{Role, Tracker, TrackerBuilder, User};
use tempfile::TempDir;

/// Helper function to create a test tracker acting as an admin
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    create_test_tracker_as(Role::Admin).await
}

/// Helper function to create a test tracker acting as `role`
pub async fn create_test_tracker_as(role: Role) -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_user(User {
            name: "tester".to_string(),
            role,
        })
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
