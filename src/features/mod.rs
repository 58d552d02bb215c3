//! Feature implementations for mindful.
//!
//! - Guided breathing
//! - Mood tracking
//! - Journal
//! - Gratitude log
//! - Affirmations
//! - Support resources

pub mod affirmations;
pub mod breathing;
pub mod gratitude;
pub mod journal;
pub mod mood;
pub mod resources;
