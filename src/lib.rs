//! mindful - a mental health companion for the terminal
//!
//! The core of this crate is a guided breathing controller: a small state
//! machine that walks through inhale, hold and exhale phases on a
//! one-second tick, reports progress, and keeps a history of saved
//! sessions. Mood, journal and gratitude logs, affirmations and support
//! resources sit alongside it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod state;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::MindfulError;
pub use features::breathing::BreathingController;
pub use state::AppState;
