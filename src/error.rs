//! Error types for mindful.

use thiserror::Error;

use crate::features::breathing::Phase;

/// Errors that can occur in mindful.
#[derive(Debug, Error)]
pub enum MindfulError {
    /// A breathing phase was configured with a zero-length duration.
    #[error("{phase} duration must be at least 1 second")]
    InvalidPhaseDuration {
        /// The phase with the rejected duration.
        phase: Phase,
    },

    /// The operation is not allowed while a breathing session is running.
    #[error("cannot change the breathing pattern while a session is running; stop it first")]
    SessionActive,

    /// Configuration could not be loaded, saved or understood.
    #[error("config error: {0}")]
    Config(String),

    /// An entry was submitted with no text.
    #[error("please write something before saving")]
    EmptyEntry,

    /// An entry exceeded the character limit.
    #[error("entry is {len} characters long; the limit is {max}")]
    EntryTooLong {
        /// Length of the rejected entry in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// No entry exists at the given position.
    #[error("no entry at position {0}")]
    EntryNotFound(usize),

    /// Terminal setup, drawing or input failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MindfulError {
    /// Whether the error came from user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPhaseDuration { .. }
                | Self::SessionActive
                | Self::EmptyEntry
                | Self::EntryTooLong { .. }
                | Self::EntryNotFound(_)
        )
    }
}
