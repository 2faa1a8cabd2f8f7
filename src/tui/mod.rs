//! Terminal user interface: wizard state machine, rendering, and the
//! event loop.

pub mod render;
pub mod theme;
pub mod wizard;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use theme::Theme;
pub use wizard::{handle_input, Step, WizardState};

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the wizard event loop until the user finishes or cancels.
///
/// The terminal is always restored, even when drawing or input fails.
pub fn run_wizard(mut state: WizardState) -> Result<WizardState> {
    let mut terminal = setup_terminal()?;

    let result = (|| -> Result<()> {
        loop {
            // Re-detect the OS theme each iteration to follow system changes
            let theme = Theme::detect();
            terminal.draw(|f| render::render(f, &state, &theme))?;

            // Poll for events with timeout
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if handle_input(&mut state, key) {
                        return Ok(());
                    }
                }
            }
        }
    })();

    restore_terminal(terminal)?;
    result?;

    Ok(state)
}
