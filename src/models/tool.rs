//! Tool model: the command run in each terminal cell.

use crate::config::Config;

/// A tool launched inside every terminal of a row.
///
/// An empty command means "plain terminal, no tool invoked".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tool {
    /// Display name
    pub name: String,
    /// Shell command, appended to the per-row `cd`; empty for none
    pub command: String,
    /// True for tools defined in the config's custom commands
    pub custom: bool,
}

impl Tool {
    fn builtin(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            custom: false,
        }
    }
}

/// Built-in tools offered on the tool step.
#[must_use]
pub fn builtin_tools() -> Vec<Tool> {
    vec![
        Tool::builtin("None - just terminals", ""),
        Tool::builtin("Claude Code", "claude"),
        Tool::builtin("Claude Code (Chrome)", "claude --chat-mode browser"),
        Tool::builtin("Codex", "codex"),
        Tool::builtin("OpenCode", "opencode"),
    ]
}

/// All selectable tools: built-ins followed by the config's custom commands.
#[must_use]
pub fn all_tools(config: &Config) -> Vec<Tool> {
    let mut tools = builtin_tools();
    for (name, command) in &config.custom_commands {
        tools.push(Tool {
            name: name.clone(),
            command: command.clone(),
            custom: true,
        });
    }
    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tools_first_is_none() {
        let tools = builtin_tools();
        assert!(tools[0].command.is_empty());
    }

    #[test]
    fn test_all_tools_appends_custom() {
        let mut config = Config::new();
        config
            .custom_commands
            .insert("fmt".to_string(), "cargo fmt".to_string());
        let tools = all_tools(&config);
        let fmt = tools.iter().find(|t| t.name == "fmt").unwrap();
        assert_eq!(fmt.command, "cargo fmt");
        assert!(fmt.custom);
        assert_eq!(tools.len(), builtin_tools().len() + 1);
    }
}
