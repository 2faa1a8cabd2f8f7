//! Workspace wizard state machine.
//!
//! This module implements the step-by-step selection flow: preset shortcut,
//! workspace mode, project(s), grid layout, tool(s), and confirmation. All
//! transitions are plain functions over [`WizardState`], independent of any
//! rendering, so the whole table is unit-testable without a terminal.
//!
//! Two modal sub-flows interrupt the step sequence: inline custom-layout
//! entry (from the layout step) and preset naming (from the confirm step).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{Config, CustomLayout, Preset};
use crate::models::{
    all_layouts, all_tools, convert_legacy_id, parse_row_cols, split_layouts, Layout, Tool,
};
use crate::scanner::Project;

/// Wizard steps, in flow order.
///
/// `Mode`, `ProjectBottom`, and `ToolBottom` are only visited when
/// applicable (two or more projects; split mode). `Preset` is only the
/// initial step when at least one preset exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Preset shortcut list (or "New workspace...")
    Preset,
    /// Single project vs. split workspace
    Mode,
    /// Project selection (top project in split mode)
    Project,
    /// Bottom project selection (split mode only)
    ProjectBottom,
    /// Grid layout selection
    Layout,
    /// Tool selection (top tool in split mode)
    Tool,
    /// Bottom tool selection (split mode only)
    ToolBottom,
    /// Summary plus Launch / Save-as-preset actions
    Confirm,
    /// Terminal state; the caller reads the selection out
    Done,
}

impl Step {
    /// Gets the step title shown in the header.
    #[must_use]
    pub const fn title(self, split_mode: bool) -> &'static str {
        match self {
            Self::Preset => "Choose a Preset",
            Self::Mode => "Workspace Mode",
            Self::Project => {
                if split_mode {
                    "Select Top Project"
                } else {
                    "Select Project"
                }
            }
            Self::ProjectBottom => "Select Bottom Project",
            Self::Layout => "Select Layout",
            Self::Tool => {
                if split_mode {
                    "Select Top Tool"
                } else {
                    "Select AI Tool"
                }
            }
            Self::ToolBottom => "Select Bottom Tool",
            Self::Confirm => "Confirm & Launch",
            Self::Done => "",
        }
    }

    /// Gets this step's position as `(number, total)`.
    ///
    /// Steps numbered 0 (Preset, and Mode in single mode) are shown without
    /// a step counter.
    #[must_use]
    pub const fn number(self, split_mode: bool) -> (usize, usize) {
        if split_mode {
            let num = match self {
                Self::Preset | Self::Done => 0,
                Self::Mode => 1,
                Self::Project => 2,
                Self::ProjectBottom => 3,
                Self::Layout => 4,
                Self::Tool => 5,
                Self::ToolBottom => 6,
                Self::Confirm => 7,
            };
            (num, 7)
        } else {
            let num = match self {
                Self::Project => 1,
                Self::Layout => 2,
                Self::Tool => 3,
                Self::Confirm => 4,
                _ => 0,
            };
            (num, 4)
        }
    }
}

/// One row of the current selection list: a title and a dimmer description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Primary line
    pub title: String,
    /// Secondary line
    pub desc: String,
}

impl ListEntry {
    fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }
}

/// Accumulated wizard state.
///
/// Selections keep their `Default` (zero) values until the corresponding
/// step confirms; preset resolution deliberately leaves misses at the zero
/// value as well.
#[derive(Debug, Clone)]
pub struct WizardState {
    /// Current step
    pub step: Step,
    /// True once the user cancelled the whole flow
    pub cancelled: bool,
    /// True once a preset or custom layout was appended to the config
    pub config_dirty: bool,
    /// Loaded configuration; the wizard only appends to its lists
    pub config: Config,
    /// Scanned projects, immutable for the run
    pub projects: Vec<Project>,
    /// Selectable tools (built-ins plus custom commands)
    pub tools: Vec<Tool>,
    /// Selectable layouts (built-ins plus custom layouts plus sentinel)
    pub layouts: Vec<Layout>,

    /// Split-workspace flag, set on the mode step or inferred from a preset
    pub split_mode: bool,
    /// Selected project (top rows in split mode)
    pub selected_project: Project,
    /// Selected bottom project (split mode)
    pub selected_bottom_project: Project,
    /// Selected layout
    pub selected_layout: Layout,
    /// Selected tool (top rows in split mode)
    pub selected_tool: Tool,
    /// Selected bottom tool (split mode)
    pub selected_bottom_tool: Tool,

    /// Cursor position in the current list
    pub list_index: usize,
    /// Incremental filter on the project steps
    pub filter: String,

    /// Preset-naming sub-mode flag
    pub naming_preset: bool,
    /// Preset name input buffer
    pub preset_name_input: String,
    /// Custom-layout sub-mode flag
    pub entering_custom_layout: bool,
    /// Custom layout input buffer (e.g. "3,4")
    pub custom_layout_input: String,
}

impl WizardState {
    /// Creates the initial wizard state.
    ///
    /// Starts on the preset step if any presets exist, otherwise on mode
    /// selection (two or more projects) or directly on project selection.
    #[must_use]
    pub fn new(projects: Vec<Project>, config: Config) -> Self {
        let tools = all_tools(&config);
        let layouts = all_layouts(&config);

        let mut state = Self {
            step: Step::Project,
            cancelled: false,
            config_dirty: false,
            config,
            projects,
            tools,
            layouts,
            split_mode: false,
            selected_project: Project::default(),
            selected_bottom_project: Project::default(),
            selected_layout: Layout::default(),
            selected_tool: Tool::default(),
            selected_bottom_tool: Tool::default(),
            list_index: 0,
            filter: String::new(),
            naming_preset: false,
            preset_name_input: String::new(),
            entering_custom_layout: false,
            custom_layout_input: String::new(),
        };

        let initial = if !state.config.presets.is_empty() {
            Step::Preset
        } else if state.projects.len() >= 2 {
            Step::Mode
        } else {
            Step::Project
        };
        state.enter_step(initial);
        state
    }

    /// Moves to `step`, resetting the filter and placing the cursor on the
    /// step's default entry.
    fn enter_step(&mut self, step: Step) {
        self.step = step;
        self.filter.clear();
        self.list_index = match step {
            // Cursor starts on the first saved preset, not "New workspace..."
            Step::Preset if !self.config.presets.is_empty() => 1,
            Step::Layout => self.default_layout_index(),
            Step::Tool | Step::ToolBottom => self.default_tool_index(),
            _ => 0,
        };
    }

    fn default_layout_index(&self) -> usize {
        if self.config.default_layout.is_empty() {
            return 0;
        }
        self.layout_choices()
            .iter()
            .position(|l| !l.is_custom_entry() && l.id() == self.config.default_layout)
            .unwrap_or(0)
    }

    fn default_tool_index(&self) -> usize {
        if self.config.default_tool.is_empty() {
            return 0;
        }
        self.tools
            .iter()
            .position(|t| t.name == self.config.default_tool)
            .unwrap_or(0)
    }

    /// Layouts offered on the layout step for the current mode.
    #[must_use]
    pub fn layout_choices(&self) -> Vec<Layout> {
        if self.split_mode {
            let mut choices = split_layouts();
            choices.push(Layout::custom_entry());
            choices
        } else {
            self.layouts.clone()
        }
    }

    /// Projects matching the incremental filter, case-insensitively.
    #[must_use]
    pub fn filtered_projects(&self) -> Vec<Project> {
        if self.filter.is_empty() {
            return self.projects.clone();
        }
        let needle = self.filter.to_lowercase();
        self.projects
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// List entries for the current step.
    #[must_use]
    pub fn entries(&self) -> Vec<ListEntry> {
        match self.step {
            Step::Preset => {
                let mut entries = vec![ListEntry::new(
                    "New workspace...",
                    "Start fresh - pick project, layout, tool",
                )];
                entries.extend(
                    self.config
                        .presets
                        .iter()
                        .map(|p| ListEntry::new(p.name.clone(), p.summary())),
                );
                entries
            }
            Step::Mode => vec![
                ListEntry::new("Single Project", "All terminals in one project"),
                ListEntry::new(
                    "Split Workspace",
                    "Top rows = project A, bottom rows = project B",
                ),
            ],
            Step::Project | Step::ProjectBottom => self
                .filtered_projects()
                .into_iter()
                .map(|p| ListEntry::new(p.name, p.path.display().to_string()))
                .collect(),
            Step::Layout => self
                .layout_choices()
                .into_iter()
                .map(|l| ListEntry::new(l.name.clone(), l.desc))
                .collect(),
            Step::Tool | Step::ToolBottom => self
                .tools
                .iter()
                .map(|t| {
                    let title = if t.custom {
                        format!("{} (custom)", t.name)
                    } else {
                        t.name.clone()
                    };
                    let desc = if t.command.is_empty() {
                        "Just open terminals".to_string()
                    } else {
                        t.command.clone()
                    };
                    ListEntry::new(title, desc)
                })
                .collect(),
            Step::Confirm => vec![
                ListEntry::new("Launch", "Open terminals now"),
                ListEntry::new(
                    "Save as preset & Launch",
                    "Save this combo for quick access next time",
                ),
            ],
            Step::Done => Vec::new(),
        }
    }

    /// Confirms the current list selection and moves forward.
    ///
    /// Returns true once the wizard is finished (reached `Done`).
    pub fn advance(&mut self) -> bool {
        match self.step {
            Step::Preset => {
                if self.list_index == 0 {
                    let next = if self.projects.len() >= 2 {
                        Step::Mode
                    } else {
                        Step::Project
                    };
                    self.enter_step(next);
                } else if let Some(preset) = self.config.presets.get(self.list_index - 1).cloned() {
                    self.apply_preset(&preset);
                    self.step = Step::Done;
                    return true;
                }
            }
            Step::Mode => {
                self.split_mode = self.list_index == 1;
                self.enter_step(Step::Project);
            }
            Step::Project => {
                let Some(project) = self.filtered_projects().into_iter().nth(self.list_index)
                else {
                    return false;
                };
                self.selected_project = project;
                let next = if self.split_mode {
                    Step::ProjectBottom
                } else {
                    Step::Layout
                };
                self.enter_step(next);
            }
            Step::ProjectBottom => {
                let Some(project) = self.filtered_projects().into_iter().nth(self.list_index)
                else {
                    return false;
                };
                self.selected_bottom_project = project;
                self.enter_step(Step::Layout);
            }
            Step::Layout => {
                let Some(chosen) = self.layout_choices().into_iter().nth(self.list_index) else {
                    return false;
                };
                if chosen.is_custom_entry() {
                    self.entering_custom_layout = true;
                } else {
                    self.selected_layout = chosen;
                    self.enter_step(Step::Tool);
                }
            }
            Step::Tool => {
                let Some(tool) = self.tools.get(self.list_index).cloned() else {
                    return false;
                };
                self.selected_tool = tool;
                let next = if self.split_mode {
                    Step::ToolBottom
                } else {
                    Step::Confirm
                };
                self.enter_step(next);
            }
            Step::ToolBottom => {
                let Some(tool) = self.tools.get(self.list_index).cloned() else {
                    return false;
                };
                self.selected_bottom_tool = tool;
                self.enter_step(Step::Confirm);
            }
            Step::Confirm => {
                if self.list_index == 0 {
                    self.step = Step::Done;
                    return true;
                }
                // "Save as preset & Launch"
                self.naming_preset = true;
            }
            Step::Done => return true,
        }
        false
    }

    /// Moves back one step; mirrors [`advance`](Self::advance) in reverse.
    ///
    /// Returns true when going back crosses the entry boundary, which
    /// cancels the whole flow.
    pub fn go_back(&mut self) -> bool {
        let has_presets = !self.config.presets.is_empty();
        match self.step {
            Step::Preset => {
                self.cancelled = true;
                return true;
            }
            Step::Mode => {
                if has_presets {
                    self.enter_step(Step::Preset);
                } else {
                    self.cancelled = true;
                    return true;
                }
            }
            Step::Project => {
                if self.projects.len() >= 2 {
                    self.enter_step(Step::Mode);
                } else if has_presets {
                    self.enter_step(Step::Preset);
                } else {
                    self.cancelled = true;
                    return true;
                }
            }
            Step::ProjectBottom => self.enter_step(Step::Project),
            Step::Layout => {
                if self.split_mode {
                    self.enter_step(Step::ProjectBottom);
                } else {
                    self.enter_step(Step::Project);
                }
            }
            Step::Tool => self.enter_step(Step::Layout),
            Step::ToolBottom => self.enter_step(Step::Tool),
            Step::Confirm => {
                if self.split_mode {
                    self.enter_step(Step::ToolBottom);
                } else {
                    self.enter_step(Step::Tool);
                }
            }
            Step::Done => {}
        }
        false
    }

    /// Resolves a saved preset onto the live project/layout/tool sets.
    ///
    /// Lookups are by exact name; a miss leaves the selection at its zero
    /// value rather than erroring, so renamed or deleted entities resolve
    /// to an empty selection. Split mode is inferred solely from a
    /// non-empty bottom project name.
    pub fn apply_preset(&mut self, preset: &Preset) {
        if let Some(project) = self.projects.iter().find(|p| p.name == preset.project) {
            self.selected_project = project.clone();
        }

        // Migrate legacy "ColsxRows" identifiers forward before lookup
        let layout_id = convert_legacy_id(&preset.layout);
        let found = self
            .layouts
            .iter()
            .find(|l| !l.is_custom_entry() && l.id() == layout_id)
            .cloned()
            .or_else(|| split_layouts().into_iter().find(|l| l.id() == layout_id));
        if let Some(found) = found {
            self.selected_layout = found;
        }

        if let Some(tool) = self.tools.iter().find(|t| t.name == preset.tool) {
            self.selected_tool = tool.clone();
        }

        if preset.is_split() {
            self.split_mode = true;
            if let Some(project) = self
                .projects
                .iter()
                .find(|p| p.name == preset.project_bottom)
            {
                self.selected_bottom_project = project.clone();
            }
            if let Some(tool) = self.tools.iter().find(|t| t.name == preset.tool_bottom) {
                self.selected_bottom_tool = tool.clone();
            }
        }
    }

    /// Confirms the custom-layout input field.
    ///
    /// Invalid input is ignored and the field stays open; valid input
    /// selects the new layout, persists it, and jumps to the tool step.
    pub fn confirm_custom_layout(&mut self) {
        let input = self.custom_layout_input.trim();
        if input.is_empty() {
            return;
        }
        let Ok(row_cols) = parse_row_cols(input) else {
            // Field stays open; nothing changes
            return;
        };

        let layout = Layout::custom(row_cols.clone());
        self.config.custom_layouts.push(CustomLayout {
            name: layout.name.clone(),
            row_cols,
        });
        self.config_dirty = true;
        self.layouts = all_layouts(&self.config);
        self.selected_layout = layout;

        self.entering_custom_layout = false;
        self.custom_layout_input.clear();
        self.enter_step(Step::Tool);
    }

    /// Cancels the custom-layout input field, returning to the layout step.
    pub fn cancel_custom_layout(&mut self) {
        self.entering_custom_layout = false;
        self.custom_layout_input.clear();
    }

    /// Confirms the preset-name input field.
    ///
    /// An empty trimmed name is a no-op (the field stays open). Otherwise
    /// the accumulated selection is appended as a preset and the wizard
    /// finishes. Returns true when the wizard reached `Done`.
    pub fn confirm_preset_name(&mut self) -> bool {
        let name = self.preset_name_input.trim().to_string();
        if name.is_empty() {
            return false;
        }

        let mut preset = Preset {
            name,
            project: self.selected_project.name.clone(),
            layout: self.selected_layout.id(),
            tool: self.selected_tool.name.clone(),
            project_bottom: String::new(),
            tool_bottom: String::new(),
        };
        if self.split_mode {
            preset.project_bottom = self.selected_bottom_project.name.clone();
            preset.tool_bottom = self.selected_bottom_tool.name.clone();
        }
        self.config.presets.push(preset);
        self.config_dirty = true;

        self.naming_preset = false;
        self.step = Step::Done;
        true
    }

    /// Cancels the preset-name input field, returning to the confirm step.
    pub fn cancel_preset_name(&mut self) {
        self.naming_preset = false;
        self.preset_name_input.clear();
    }

    /// Labels and values summarizing the selections made so far.
    #[must_use]
    pub fn selection_summary(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        if self.split_mode {
            if self.step > Step::Project {
                lines.push(("Top:", self.selected_project.name.clone()));
            }
            if self.step > Step::ProjectBottom {
                lines.push(("Bottom:", self.selected_bottom_project.name.clone()));
            }
            if self.step > Step::Layout {
                lines.push(("Layout:", self.layout_summary()));
            }
            if self.step > Step::Tool {
                lines.push(("Top Tool:", self.selected_tool.name.clone()));
            }
            if self.step > Step::ToolBottom {
                lines.push(("Btm Tool:", self.selected_bottom_tool.name.clone()));
            }
        } else {
            if self.step > Step::Project {
                lines.push(("Project:", self.selected_project.name.clone()));
            }
            if self.step > Step::Layout {
                lines.push(("Layout:", self.layout_summary()));
            }
            if self.step > Step::Tool {
                lines.push(("Tool:", self.selected_tool.name.clone()));
            }
        }
        lines
    }

    /// "Name ([ ][ ] / [ ][ ])" form of the selected layout.
    #[must_use]
    pub fn layout_summary(&self) -> String {
        format!(
            "{} ({})",
            self.selected_layout.name, self.selected_layout.desc
        )
    }

    /// True while one of the modal text fields is open.
    #[must_use]
    pub fn in_text_entry(&self) -> bool {
        self.naming_preset || self.entering_custom_layout
    }

    /// Moves the list cursor up.
    fn cursor_up(&mut self) {
        self.list_index = self.list_index.saturating_sub(1);
    }

    /// Moves the list cursor down.
    fn cursor_down(&mut self) {
        let len = self.entries().len();
        if self.list_index + 1 < len {
            self.list_index += 1;
        }
    }

    /// True on the steps that support incremental type-to-filter.
    fn filterable(&self) -> bool {
        matches!(self.step, Step::Project | Step::ProjectBottom)
    }
}

/// Handles one key event.
///
/// Returns true when the wizard should exit, either cancelled or with a
/// completed selection (distinguished via [`WizardState::cancelled`]).
pub fn handle_input(state: &mut WizardState, key: KeyEvent) -> bool {
    // Ctrl-C cancels everywhere, short-circuiting any sub-mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.cancelled = true;
        return true;
    }

    if state.naming_preset {
        match key.code {
            KeyCode::Enter => return state.confirm_preset_name(),
            KeyCode::Esc => state.cancel_preset_name(),
            KeyCode::Backspace => {
                state.preset_name_input.pop();
            }
            KeyCode::Char(c) => state.preset_name_input.push(c),
            _ => {}
        }
        return false;
    }

    if state.entering_custom_layout {
        match key.code {
            KeyCode::Enter => state.confirm_custom_layout(),
            KeyCode::Esc => state.cancel_custom_layout(),
            KeyCode::Backspace => {
                state.custom_layout_input.pop();
            }
            KeyCode::Char(c) => state.custom_layout_input.push(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::Enter => return state.advance(),
        KeyCode::Esc => {
            // Esc clears an active filter before it navigates back
            if state.filterable() && !state.filter.is_empty() {
                state.filter.clear();
                state.list_index = 0;
            } else {
                return state.go_back();
            }
        }
        KeyCode::Char(c) if state.filterable() => {
            state.filter.push(c);
            state.list_index = 0;
        }
        KeyCode::Backspace if state.filterable() => {
            state.filter.pop();
            state.list_index = 0;
        }
        _ => {}
    }
    false
}
