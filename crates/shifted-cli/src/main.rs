//! Shifted CLI Application
//!
//! Command-line interface for tracking projects and tasks and laying them out
//! on a Gantt timeline.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{handle_config_command, Cli};
use log::info;
use mcp::{run_stdio_server, ShiftedMcpServer};
use renderer::TerminalRenderer;
use shifted_core::{params::ListProjects, Settings, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config_file,
        no_color,
        role,
        command,
    } = Args::parse();

    let settings_path = match config_file {
        Some(path) => path,
        None => Settings::default_path().context("Failed to locate settings file")?,
    };
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;

    let renderer = TerminalRenderer::new(!no_color, settings.theme);

    let command = match command {
        Some(Config { command }) => {
            return handle_config_command(command, settings, &settings_path, &renderer);
        }
        other => other,
    };

    let mut user = settings.user.clone();
    if let Some(role) = role {
        user.role = role.into();
    }

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_user(user)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Shifted started as {}", tracker.user().role);

    let timeline_config = settings.timeline;
    match command {
        Some(Project { command }) => {
            Cli::new(tracker, renderer, timeline_config)
                .handle_project_command(command)
                .await
        }
        Some(Task { command }) => {
            Cli::new(tracker, renderer, timeline_config)
                .handle_task_command(command)
                .await
        }
        Some(Timeline(args)) => {
            Cli::new(tracker, renderer, timeline_config)
                .show_timeline(&args)
                .await
        }
        Some(Serve) => {
            info!("Starting Shifted MCP server");
            run_stdio_server(ShiftedMcpServer::new(tracker, timeline_config))
                .await
                .context("MCP server failed")
        }
        // Handled before the tracker is built
        Some(Config { .. }) => Ok(()),
        None => {
            Cli::new(tracker, renderer, timeline_config)
                .list_projects(&ListProjects::default())
                .await
        }
    }
}
