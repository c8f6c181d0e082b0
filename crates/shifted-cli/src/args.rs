use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ConfigCommands, ProjectCommands, RoleArg, TaskCommands, TimelineArgs};

/// Track projects and tasks and lay them out on a Gantt timeline
///
/// Shifted keeps projects and their tasks in a local SQLite database. It can
/// render a project's schedule as a text Gantt chart, emit the layout as JSON
/// for other front ends, or run as an MCP (Model Context Protocol) server so
/// AI assistants can manage the same data.
#[derive(Parser)]
#[command(version, about, name = "shifted")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/shifted/shifted.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/shifted/settings.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Act with this role for one invocation instead of the configured one
    #[arg(long, global = true, value_enum)]
    pub role: Option<RoleArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shifted CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage tasks within projects
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show a project's Gantt timeline
    #[command(alias = "tl")]
    Timeline(TimelineArgs),
    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Start the MCP server
    Serve,
}
