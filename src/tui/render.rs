//! Wizard rendering.
//!
//! Pure presentation over [`WizardState`]: header, step indicator, the
//! running selection summary, the current list, and the modal input
//! overlays. No transition logic lives here.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::APP_NAME;
use crate::tui::theme::Theme;
use crate::tui::wizard::{Step, WizardState};

/// Renders the whole wizard screen.
pub fn render(f: &mut Frame, state: &WizardState, theme: &Theme) {
    if state.step == Step::Done {
        return;
    }

    let summary = state.selection_summary();
    let summary_height = if summary.is_empty() {
        0
    } else {
        summary.len() as u16 + 1
    };

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(1),              // Step indicator
            Constraint::Length(summary_height), // Selections so far
            Constraint::Min(5),                 // List / confirm box / input
            Constraint::Length(1),              // Key hints
        ])
        .split(f.area());

    render_header(f, theme, chunks[0]);
    render_step_indicator(f, state, theme, chunks[1]);
    render_selection_summary(f, &summary, theme, chunks[2]);

    if state.naming_preset {
        render_text_entry(
            f,
            theme,
            chunks[3],
            "Preset name",
            &state.preset_name_input,
            "my-preset",
            None,
        );
    } else if state.entering_custom_layout {
        render_text_entry(
            f,
            theme,
            chunks[3],
            "Columns per row",
            &state.custom_layout_input,
            "3,4",
            Some("e.g. 3,4 = 3 top, 4 bottom"),
        );
    } else if state.step == Step::Confirm {
        render_confirm(f, state, theme, chunks[3]);
    } else {
        render_list(f, state, theme, chunks[3]);
    }

    render_key_hints(f, state, theme, chunks[4]);
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        Span::raw("  Workspace Launcher"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(header, area);
}

fn render_step_indicator(f: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let (num, total) = state.step.number(state.split_mode);
    let title = state.step.title(state.split_mode);
    let text = if num == 0 {
        title.to_string()
    } else {
        format!("Step {num}/{total}: {title}")
    };
    let indicator = Paragraph::new(text).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(indicator, area);
}

fn render_selection_summary(
    f: &mut Frame,
    summary: &[(&'static str, String)],
    theme: &Theme,
    area: Rect,
) {
    if summary.is_empty() {
        return;
    }
    let lines: Vec<Line> = summary
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<10}"), Style::default().fg(theme.text_muted)),
                Span::styled(
                    value.clone(),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn render_list(f: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let entries = state.entries();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    entry.title.clone(),
                    Style::default().fg(theme.text),
                )),
                Line::from(Span::styled(
                    format!("  {}", entry.desc),
                    Style::default().fg(theme.text_muted),
                )),
            ])
        })
        .collect();

    let title = if state.filter.is_empty() {
        String::new()
    } else {
        format!(" Filter: {} ", state.filter)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !entries.is_empty() {
        list_state.select(Some(state.list_index.min(entries.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_confirm(f: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let label_style = Style::default().fg(theme.text_muted);
    let value_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<13}"), label_style),
            Span::styled(value, value_style),
        ])
    };

    let lines = if state.split_mode {
        vec![
            row("Top Project:", state.selected_project.name.clone()),
            row(
                "Top Dir:",
                state.selected_project.path.display().to_string(),
            ),
            row("Top Tool:", state.selected_tool.name.clone()),
            row("Btm Project:", state.selected_bottom_project.name.clone()),
            row(
                "Btm Dir:",
                state.selected_bottom_project.path.display().to_string(),
            ),
            row("Btm Tool:", state.selected_bottom_tool.name.clone()),
            row("Layout:", state.layout_summary()),
        ]
    } else {
        vec![
            row("Project:", state.selected_project.name.clone()),
            row("Layout:", state.layout_summary()),
            row("Tool:", state.selected_tool.name.clone()),
            row(
                "Directory:",
                state.selected_project.path.display().to_string(),
            ),
        ]
    };
    let box_height = lines.len() as u16 + 2;

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(box_height), Constraint::Min(4)])
        .split(area);

    let summary_box = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Ready? "),
    );
    f.render_widget(summary_box, chunks[0]);

    render_list(f, state, theme, chunks[1]);
}

fn render_text_entry(
    f: &mut Frame,
    theme: &Theme,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    hint: Option<&str>,
) {
    let input_line = if value.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{placeholder}_"),
                Style::default().fg(theme.text_muted),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{value}_"),
                Style::default().fg(theme.accent),
            ),
        ])
    };

    let mut lines = vec![Line::from(""), input_line, Line::from("")];
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.text_muted),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(format!(" {label} ")),
        );
    f.render_widget(paragraph, area);
}

fn render_key_hints(f: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    let hints = if state.in_text_entry() {
        "Enter: Confirm  |  Esc: Cancel"
    } else if matches!(state.step, Step::Project | Step::ProjectBottom) {
        "Type to filter  |  Up/Down: Navigate  |  Enter: Select  |  Esc: Back"
    } else {
        "Up/Down: Navigate  |  Enter: Select  |  Esc: Back  |  Ctrl+C: Quit"
    };
    let paragraph = Paragraph::new(hints)
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
