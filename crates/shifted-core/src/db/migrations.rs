//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Task columns added after the first release of the schema.
const TASK_COLUMN_MIGRATIONS: [(&str, &str); 2] = [
    ("assignee", "TEXT"),
    (
        "duration_days",
        "INTEGER CHECK (duration_days IS NULL OR duration_days > 0)",
    ),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .pragma_update(None, "foreign_keys", true)
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Add any task column missing from an existing database.
    fn apply_migrations(&self) -> Result<()> {
        for (column, definition) in TASK_COLUMN_MIGRATIONS {
            if !self.has_column("tasks", column)? {
                log::info!("Migrating tasks table: adding column '{column}'");
                self.connection
                    .execute(
                        &format!("ALTER TABLE tasks ADD COLUMN {column} {definition}"),
                        [],
                    )
                    .db_context("Failed to migrate tasks table")?;
            }
        }
        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
