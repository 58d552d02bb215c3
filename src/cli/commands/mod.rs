//! Command implementations for mindful.
//!
//! This module contains the implementation of all CLI commands.

mod breathe;
mod companion;
mod config;
mod shell;

pub use breathe::breathe;
pub use companion::companion;
pub use config::config;
pub use shell::completions;

use chrono::Local;

use crate::cli::args::OutputFormat;
use crate::error::MindfulError;
use crate::features::{affirmations, resources};
use crate::output::{format_affirmations, format_resources};

/// Execute affirm command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn affirm(all: bool, format: OutputFormat) -> Result<String, MindfulError> {
    if all {
        format_affirmations(affirmations::all(), format)
    } else {
        let today = Local::now().date_naive();
        format_affirmations(&[affirmations::for_date(today)], format)
    }
}

/// Execute resources command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn resources(format: OutputFormat) -> Result<String, MindfulError> {
    format_resources(resources::all(), format)
}
