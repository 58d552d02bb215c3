//! Application state shared by the companion's screens.
//!
//! One owned value holds every log and the breathing controller, which in
//! turn owns the only copy of the saved breathing sessions. Screens receive
//! it by reference and change it only through the operations below.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use crate::error::MindfulError;
use crate::features::breathing::{
    BreathingController, CueSink, NoCues, PhaseConfig, SessionHistory, SessionRecord,
};
use crate::features::gratitude::{GratitudeEntry, GratitudeLog};
use crate::features::journal::{Journal, JournalEntry};
use crate::features::mood::{Mood, MoodEntry, MoodLog, MoodSummary};

/// Everything the user has logged this run.
#[derive(Debug)]
pub struct AppState<S: CueSink = NoCues> {
    moods: MoodLog,
    journal: Journal,
    gratitude: GratitudeLog,
    breathing: BreathingController<S>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BreathingController::silent(PhaseConfig::default()))
    }
}

impl<S: CueSink> AppState<S> {
    /// Create empty logs around a breathing controller.
    #[must_use]
    pub fn new(breathing: BreathingController<S>) -> Self {
        Self {
            moods: MoodLog::new(),
            journal: Journal::new(),
            gratitude: GratitudeLog::new(),
            breathing,
        }
    }

    /// Record a mood check-in.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryTooLong` for an over-long note.
    pub fn record_mood(
        &mut self,
        mood: Mood,
        note: Option<&str>,
        tags: &[String],
    ) -> Result<&MoodEntry, MindfulError> {
        let entry = self.moods.record(mood, note, tags)?;
        debug!(%mood, "mood recorded");
        Ok(entry)
    }

    /// Delete a mood check-in.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range.
    pub fn remove_mood(&mut self, index: usize) -> Result<MoodEntry, MindfulError> {
        self.moods.remove(index)
    }

    /// Write a journal entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank or over-long text.
    pub fn add_journal_entry(
        &mut self,
        text: &str,
        mood: Option<Mood>,
        tags: &[String],
    ) -> Result<&JournalEntry, MindfulError> {
        let entry = self.journal.add(text, mood, tags)?;
        debug!(chars = entry.text.chars().count(), "journal entry added");
        Ok(entry)
    }

    /// Delete a journal entry.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range.
    pub fn remove_journal_entry(&mut self, index: usize) -> Result<JournalEntry, MindfulError> {
        self.journal.remove(index)
    }

    /// Add a gratitude entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank or over-long text.
    pub fn add_gratitude(
        &mut self,
        text: &str,
        tags: &[String],
    ) -> Result<&GratitudeEntry, MindfulError> {
        self.gratitude.add(text, tags)
    }

    /// Replace a gratitude entry.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` or a validation error.
    pub fn edit_gratitude(
        &mut self,
        index: usize,
        text: &str,
        tags: &[String],
    ) -> Result<&GratitudeEntry, MindfulError> {
        self.gratitude.edit(index, text, tags)
    }

    /// Delete a gratitude entry.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range.
    pub fn remove_gratitude(&mut self, index: usize) -> Result<GratitudeEntry, MindfulError> {
        self.gratitude.remove(index)
    }

    /// Save the current breathing session.
    pub fn save_breathing_session(&mut self) -> &SessionRecord {
        self.breathing.save_session()
    }

    /// Forget every saved breathing session.
    pub fn clear_breathing_sessions(&mut self) -> usize {
        self.breathing.clear_history()
    }

    /// Mood log.
    #[must_use]
    pub const fn moods(&self) -> &MoodLog {
        &self.moods
    }

    /// Mood summary.
    #[must_use]
    pub fn mood_summary(&self) -> MoodSummary {
        self.moods.summary()
    }

    /// Journal.
    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Gratitude log.
    #[must_use]
    pub const fn gratitude(&self) -> &GratitudeLog {
        &self.gratitude
    }

    /// The breathing controller.
    #[must_use]
    pub const fn breathing(&self) -> &BreathingController<S> {
        &self.breathing
    }

    /// Mutable access to the breathing controller.
    pub fn breathing_mut(&mut self) -> &mut BreathingController<S> {
        &mut self.breathing
    }

    /// Saved breathing sessions, as held by the controller.
    #[must_use]
    pub const fn breathing_sessions(&self) -> &SessionHistory {
        self.breathing.history()
    }

    /// Whether nothing has been logged or saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
            && self.journal.is_empty()
            && self.gratitude.is_empty()
            && self.breathing_sessions().is_empty()
    }
}

impl<S: CueSink> Serialize for AppState<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut state = serializer.serialize_struct("AppState", 4)?;
        state.serialize_field("moods", &self.moods)?;
        state.serialize_field("journal", &self.journal)?;
        state.serialize_field("gratitude", &self.gratitude)?;
        state.serialize_field("breathing", self.breathing_sessions())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_logs_are_independent() {
        let mut state = AppState::default();
        state
            .record_mood(Mood::Good, Some("rested"), &tags(&["sleep"]))
            .unwrap();
        state
            .add_journal_entry("First entry", Some(Mood::Good), &[])
            .unwrap();
        state.add_gratitude("Friends", &tags(&["people"])).unwrap();

        assert_eq!(state.moods().len(), 1);
        assert_eq!(state.journal().len(), 1);
        assert_eq!(state.gratitude().len(), 1);
        assert!(state.breathing_sessions().is_empty());
        assert!(!state.is_empty());
    }

    #[test]
    fn test_invalid_entries_leave_state_unchanged() {
        let mut state = AppState::default();
        assert!(state.add_journal_entry("", None, &[]).is_err());
        assert!(state.add_gratitude("  ", &[]).is_err());
        assert!(state.remove_mood(0).is_err());
        assert!(state
            .record_mood(Mood::Sad, Some(&"x".repeat(501)), &[])
            .is_err());
        assert!(state.is_empty());
    }

    #[test]
    fn test_breathing_history_has_one_owner() {
        let mut state = AppState::default();
        state.breathing_mut().start();
        state.breathing_mut().tick();
        state.save_breathing_session();
        state.breathing_mut().save_session();

        assert_eq!(state.breathing_sessions().len(), 2);
        assert_eq!(
            state.breathing_sessions().len(),
            state.breathing().history().len()
        );
        assert_eq!(
            state
                .breathing_sessions()
                .last()
                .map(|r| r.completed_elapsed),
            Some(1)
        );
        assert_eq!(state.clear_breathing_sessions(), 2);
        assert!(state.breathing().history().is_empty());
    }

    #[test]
    fn test_edit_and_remove_gratitude() {
        let mut state = AppState::default();
        state.add_gratitude("Rain", &[]).unwrap();
        state
            .edit_gratitude(0, "Warm rain", &tags(&["weather"]))
            .unwrap();
        assert_eq!(state.gratitude().entries()[0].text, "Warm rain");
        assert_eq!(state.remove_gratitude(0).unwrap().tags, vec!["weather"]);
    }

    #[test]
    fn test_mood_summary() {
        let mut state = AppState::default();
        state.record_mood(Mood::Great, None, &[]).unwrap();
        assert_eq!(state.mood_summary().most_common, Some(Mood::Great));
        assert!(state.remove_journal_entry(0).is_err());
    }

    #[test]
    fn test_serializes_controller_history() {
        let mut state = AppState::default();
        state.save_breathing_session();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["breathing"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["moods"].as_array().map(Vec::len), Some(0));
    }
}
