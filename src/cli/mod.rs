//! Command-line interface for mindful.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};
