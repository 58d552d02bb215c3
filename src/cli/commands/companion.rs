//! Interactive companion session.

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::BreathingSettings;
use crate::error::MindfulError;
use crate::features::breathing::{BreathingController, PhaseConfig};
use crate::output::format_state;
use crate::state::AppState;
use crate::tui::{self, Tab, TerminalCues};

/// Open the companion screen on `tab` with the configured breathing pattern.
///
/// Everything logged lives for this session only and is printed after the
/// screen closes.
///
/// # Errors
///
/// Returns an error for terminal failures or output formatting failures.
pub fn companion(
    settings: &BreathingSettings,
    tab: Tab,
    format: OutputFormat,
) -> Result<String, MindfulError> {
    companion_with(settings, settings.pattern, tab, format)
}

/// Open the companion screen with an explicit breathing pattern.
pub(crate) fn companion_with(
    settings: &BreathingSettings,
    pattern: PhaseConfig,
    tab: Tab,
    format: OutputFormat,
) -> Result<String, MindfulError> {
    let cues = TerminalCues::new(settings.sound, settings.vibration);
    let state = AppState::new(BreathingController::new(pattern, cues));
    let state = tui::run(state, tab)?;
    info!(tab = tab.title(), "companion session ended");

    format_state(&state, format)
}
