//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::MindfulError;
use crate::tui::app::{App, InputPurpose, Tab};

/// Action to take after handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events, waiting at most `timeout` for one.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, MindfulError> {
    if !event::poll(timeout).map_err(|e| MindfulError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| MindfulError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    Ok(handle_key(app, key))
}

/// Apply one key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.input.is_some() {
        match key.code {
            KeyCode::Enter => app.submit_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Char(c) => app.input_char(c),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('?') => app.show_help(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        code => match app.tab {
            Tab::Breathe => breathe_key(app, code),
            Tab::Mood => mood_key(app, code),
            Tab::Journal => journal_key(app, code),
            Tab::Gratitude => gratitude_key(app, code),
        },
    }

    None
}

fn breathe_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('c') => app.clear_sessions(),
        KeyCode::Char('m') => app.toggle_sound(),
        KeyCode::Char('v') => app.toggle_vibration(),
        _ => {}
    }
}

fn mood_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.shift_mood(false),
        KeyCode::Right | KeyCode::Char('l') => app.shift_mood(true),
        KeyCode::Enter => app.record_mood(),
        KeyCode::Char('n') => app.begin_input(InputPurpose::MoodNote),
        KeyCode::Char('d') => app.delete_selected(),
        _ => {}
    }
}

fn journal_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.shift_mood(false),
        KeyCode::Right | KeyCode::Char('l') => app.shift_mood(true),
        KeyCode::Char('a') => app.begin_input(InputPurpose::JournalEntry),
        KeyCode::Char('/') => app.begin_input(InputPurpose::JournalSearch),
        KeyCode::Char('d') => app.delete_selected(),
        _ => {}
    }
}

fn gratitude_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('a') => app.begin_input(InputPurpose::GratitudeAdd),
        KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        _ => {}
    }
}
