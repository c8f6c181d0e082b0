//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with styling and MCP
//! clients can show it as-is.

use std::fmt;

use super::datetime::{LocalDateTime, Schedule};
use crate::models::{Priority, Project, ProjectStatus, ProjectSummary, Task, TaskStatus};

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Schedule: {}", Schedule(self.start_date, self.end_date))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this project.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(assignee) = &self.assignee {
            writeln!(f, "- Assignee: {assignee}")?;
        }
        writeln!(f, "- Schedule: {}", Schedule(self.start_date, self.end_date))?;
        if let Some(days) = self.duration_days {
            writeln!(f, "- Duration: {days} day{}", if days == 1 { "" } else { "s" })?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = match self.progress_percent() {
            Some(percent) => format!(
                " ({}/{}, {percent}%)",
                self.completed_tasks, self.total_tasks
            ),
            None => String::new(),
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Priority**: {}", self.priority)?;
        writeln!(
            f,
            "- **Schedule**: {}",
            Schedule(self.start_date, self.end_date)
        )?;
        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}
