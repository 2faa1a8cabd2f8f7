//! Terminal workspace launching.
//!
//! Composes the per-row shell commands, detects the screen, builds the
//! tiling AppleScript, and hands it to `osascript`. All steps are
//! sequential and synchronous; the generated script itself serializes
//! window creation.

pub mod screen;
pub mod script;

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

pub use screen::{detect_screen, ScreenBounds};
pub use script::{applescript_escape, build_tiling_script, shell_quote};

/// Everything needed to open one tiled workspace.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Project directory per row; rows past the end reuse the first entry
    pub project_dirs: Vec<PathBuf>,
    /// Column count per row
    pub row_cols: Vec<u32>,
    /// Tool command per row; empty string opens a plain terminal
    pub tool_commands: Vec<String>,
}

/// Builds the shell command for each row: `cd <dir> && clear [&& tool]`.
///
/// Single-project mode passes one directory (and one tool command) that
/// every row reuses.
fn row_commands(opts: &LaunchOptions) -> Result<Vec<String>> {
    let Some(first_dir) = opts.project_dirs.first() else {
        bail!("no project directory selected");
    };

    let mut commands = Vec::with_capacity(opts.row_cols.len());
    for row in 0..opts.row_cols.len() {
        let dir = opts.project_dirs.get(row).unwrap_or(first_dir);
        let tool = opts
            .tool_commands
            .get(row)
            .or_else(|| opts.tool_commands.first())
            .map_or("", String::as_str);

        let mut cmd = format!(
            "cd {} && clear",
            shell_quote(&dir.to_string_lossy())
        );
        if !tool.is_empty() {
            cmd.push_str(" && ");
            cmd.push_str(tool);
        }
        commands.push(cmd);
    }
    Ok(commands)
}

/// Executes an AppleScript via `osascript`, surfacing the combined output
/// on failure.
fn exec_applescript(script: &str) -> Result<()> {
    let output = Command::new("osascript")
        .args(["-e", script])
        .output()
        .context("Failed to run osascript")?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        bail!("osascript failed ({}): {}", output.status, combined.trim());
    }
    Ok(())
}

/// Opens and tiles one terminal window per grid cell.
///
/// Screen detection is best-effort: on failure the fixed fallback
/// rectangle is used. Script build and execution errors are returned to
/// the caller.
pub fn launch(opts: &LaunchOptions) -> Result<()> {
    let bounds = detect_screen().unwrap_or_else(|_| ScreenBounds::fallback());

    let term_cmds = row_commands(opts)?;
    let script = build_tiling_script(&bounds, &opts.row_cols, &term_cmds)
        .context("Failed to build tiling script")?;

    exec_applescript(&script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_commands_single_project_reuses_dir() {
        let opts = LaunchOptions {
            project_dirs: vec![PathBuf::from("/work/app")],
            row_cols: vec![2, 2],
            tool_commands: vec!["editor".to_string()],
        };
        let cmds = row_commands(&opts).unwrap();
        assert_eq!(
            cmds,
            vec![
                "cd '/work/app' && clear && editor".to_string(),
                "cd '/work/app' && clear && editor".to_string(),
            ]
        );
    }

    #[test]
    fn test_row_commands_split() {
        let opts = LaunchOptions {
            project_dirs: vec![PathBuf::from("/work/api"), PathBuf::from("/work/ui")],
            row_cols: vec![3, 3],
            tool_commands: vec![String::new(), "fmt".to_string()],
        };
        let cmds = row_commands(&opts).unwrap();
        assert_eq!(cmds[0], "cd '/work/api' && clear");
        assert_eq!(cmds[1], "cd '/work/ui' && clear && fmt");
    }

    #[test]
    fn test_row_commands_quotes_awkward_dirs() {
        let opts = LaunchOptions {
            project_dirs: vec![PathBuf::from("/work/bob's stuff")],
            row_cols: vec![1],
            tool_commands: vec![String::new()],
        };
        let cmds = row_commands(&opts).unwrap();
        assert_eq!(cmds[0], "cd '/work/bob'\\''s stuff' && clear");
    }

    #[test]
    fn test_row_commands_no_project_is_error() {
        let opts = LaunchOptions {
            project_dirs: vec![],
            row_cols: vec![2],
            tool_commands: vec![],
        };
        assert!(row_commands(&opts).is_err());
    }
}
