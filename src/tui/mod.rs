//! Terminal User Interface (TUI) for mindful.
//!
//! Provides the interactive companion: breathing, mood, journal and
//! gratitude tabs over one shared `AppState`. The render loop is the only
//! clock: each pass feeds the current instant to the breathing controller,
//! then waits for input until the next tick is due.
//! Built with ratatui and crossterm.

mod app;
mod cues;
mod event;
mod ui;

pub use app::{App, Tab};
pub use cues::TerminalCues;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::error::MindfulError;
use crate::state::AppState;

/// Longest wait for input so flashes and the clock stay responsive.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Run the TUI application.
///
/// Opens on `tab` and returns the state when the user quits so what was
/// logged can be reported.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    state: AppState<TerminalCues>,
    tab: Tab,
) -> Result<AppState<TerminalCues>, MindfulError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| MindfulError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| MindfulError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| MindfulError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(state, tab);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    let mut state = app.into_state();
    state.breathing_mut().stop();
    result.map(|()| state)
}

/// Run the main application loop.
fn run_app<B: Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), MindfulError> {
    loop {
        let now = Instant::now();
        if app.on_clock(now) {
            ring_bell(terminal.backend_mut())?;
        }

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| MindfulError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = app
            .state
            .breathing()
            .until_next_tick(Instant::now())
            .map_or(MAX_POLL, |wait| wait.min(MAX_POLL));

        // Handle events
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
            }
        }
    }

    debug!(
        moods = app.state.moods().len(),
        journal = app.state.journal().len(),
        gratitude = app.state.gratitude().len(),
        sessions = app.state.breathing_sessions().len(),
        "leaving companion screen"
    );
    Ok(())
}

/// Sound the terminal bell.
fn ring_bell<W: Write>(out: &mut W) -> Result<(), MindfulError> {
    out.write_all(b"\x07")?;
    out.flush()?;
    Ok(())
}
