//! Output formatting for mindful.
//!
//! This module provides formatters for displaying companion data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::MindfulError;
use crate::features::breathing::{BreathingRun, CueSink};
use crate::features::resources::Resource;
use crate::state::AppState;

pub use json::*;
pub use pretty::*;

/// Format a headless breathing run based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_breathing_run(run: &BreathingRun, format: OutputFormat) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => Ok(format_breathing_run_pretty(run)),
        OutputFormat::Json => to_json(run),
    }
}

/// Format an interactive session's logs based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_state<S: CueSink>(state: &AppState<S>, format: OutputFormat) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => Ok(format_state_pretty(state)),
        OutputFormat::Json => to_json(state),
    }
}

/// Format affirmations based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_affirmations(items: &[&str], format: OutputFormat) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => Ok(format_affirmations_pretty(items)),
        OutputFormat::Json => format_affirmations_json(items),
    }
}

/// Format resources based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_resources(resources: &[Resource], format: OutputFormat) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => Ok(format_resources_pretty(resources)),
        OutputFormat::Json => format_resources_json(resources),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` or `MindfulError::Yaml` if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => config.to_yaml(),
        OutputFormat::Json => to_json(config),
    }
}
