//! Core abstractions for mindful.
//!
//! This module provides shared traits and utilities used across features.

mod text;
mod traits;

pub use text::{normalize_tags, split_hashtags, validate_entry_text, MAX_ENTRY_CHARS};
pub use traits::Entry;
