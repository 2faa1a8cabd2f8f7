//! Termtile - Interactive launcher for tiled terminal workspaces
//!
//! This application walks the user through picking a project directory, a
//! terminal grid layout, and a tool to run in each terminal, then opens
//! and tiles one Terminal window per grid cell.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use termtile::config::Config;
use termtile::constants::APP_NAME;
use termtile::launcher::{self, LaunchOptions};
use termtile::scanner;
use termtile::tui::{self, WizardState};

/// Termtile - Interactive launcher for tiled terminal workspaces
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base directory to scan for projects (defaults to the current directory)
    #[arg(value_name = "DIR")]
    base_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    let config = Config::load().context("Failed to load configuration")?;

    let projects = scanner::scan(&base_dir)
        .with_context(|| format!("Failed to scan {}", base_dir.display()))?;
    if projects.is_empty() {
        bail!("no project folders found in {}", base_dir.display());
    }

    let state = tui::run_wizard(WizardState::new(projects, config))?;

    if state.cancelled {
        return Ok(ExitCode::SUCCESS);
    }

    // Persist appended presets/custom layouts; a failed save must not stop
    // the launch
    if state.config_dirty {
        if let Err(e) = state.config.save() {
            eprintln!("Warning: could not save config: {e:#}");
        }
    }

    let mut project_dirs = vec![state.selected_project.path.clone()];
    let mut tool_commands = vec![state.selected_tool.command.clone()];
    if state.split_mode {
        project_dirs.push(state.selected_bottom_project.path.clone());
        tool_commands.push(state.selected_bottom_tool.command.clone());
    }

    let target = if state.split_mode {
        format!(
            "{} + {}",
            state.selected_project.name, state.selected_bottom_project.name
        )
    } else {
        state.selected_project.name.clone()
    };
    println!(
        "{}: launching {} terminals ({}) in {}...",
        APP_NAME,
        state.selected_layout.total_terminals(),
        state.selected_layout.id(),
        target
    );

    launcher::launch(&LaunchOptions {
        project_dirs,
        row_cols: state.selected_layout.row_cols.clone(),
        tool_commands,
    })
    .context("Failed to launch terminals")?;

    Ok(ExitCode::SUCCESS)
}
