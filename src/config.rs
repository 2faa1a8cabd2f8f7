//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in TOML
//! format with platform-specific directory resolution. The configuration
//! holds default selections, user-defined tool commands, saved workspace
//! presets, and custom grid layouts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_BINARY_NAME;

/// A named, persisted snapshot of a wizard selection.
///
/// A preset stores entity *names*, not the entities themselves; it is
/// re-resolved against the live project list and tool set each time it is
/// applied. A non-empty `project_bottom` marks the preset as a split
/// workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// User-chosen preset name
    pub name: String,
    /// Project name (top rows in split mode)
    pub project: String,
    /// Layout identifier, either comma format ("3,4") or legacy "ColsxRows"
    pub layout: String,
    /// Tool name (top rows in split mode)
    pub tool: String,
    /// Bottom project name; empty for single-project presets
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_bottom: String,
    /// Bottom tool name; empty for single-project presets
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tool_bottom: String,
}

impl Preset {
    /// Returns true if this preset describes a split workspace.
    #[must_use]
    pub fn is_split(&self) -> bool {
        !self.project_bottom.is_empty()
    }

    /// Produces a one-line summary for display in the preset list.
    #[must_use]
    pub fn summary(&self) -> String {
        let tool = if self.tool.is_empty() {
            "None"
        } else {
            &self.tool
        };
        if self.is_split() {
            let tool_bottom = if self.tool_bottom.is_empty() {
                "None"
            } else {
                &self.tool_bottom
            };
            format!(
                "{} + {} | {} | {} + {}",
                self.project, self.project_bottom, self.layout, tool, tool_bottom
            )
        } else {
            format!("{} | {} | {}", self.project, self.layout, tool)
        }
    }
}

/// A user-defined grid layout persisted from the custom-layout entry field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLayout {
    /// Display name (e.g. "Custom 3,4")
    pub name: String,
    /// Column count per row, top to bottom
    pub row_cols: Vec<u32>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/termtile/config.toml`
/// - macOS: `~/Library/Application Support/termtile/config.toml`
/// - Windows: `%APPDATA%\termtile\config.toml`
///
/// The wizard only ever appends to `presets` and `custom_layouts`; the
/// remaining fields are read-only defaults edited by the user directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Layout identifier preselected in the layout list
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_layout: String,
    /// Tool name preselected in the tool list
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_tool: String,
    /// User-defined tool commands, keyed by display name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_commands: BTreeMap<String, String>,
    /// Saved workspace presets, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<Preset>,
    /// Saved custom layouts, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_layouts: Vec<CustomLayout>,
}

impl Config {
    /// Creates a new Config with default (empty) values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration. A file
    /// that exists but fails to read or parse is an error; starting with
    /// an empty config would silently discard the user's presets.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
