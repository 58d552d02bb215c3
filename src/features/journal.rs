//! Journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{normalize_tags, validate_entry_text, Entry};
use crate::error::MindfulError;
use crate::features::mood::Mood;

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the entry was written
    pub written_at: DateTime<Utc>,
    /// Entry text, trimmed
    pub text: String,
    /// Mood at the time of writing
    pub mood: Option<Mood>,
    /// Normalized tags
    pub tags: Vec<String>,
}

impl Entry for JournalEntry {
    fn text(&self) -> &str {
        &self.text
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn written_at(&self) -> DateTime<Utc> {
        self.written_at
    }
}

/// In-memory journal, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Write a new entry.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EmptyEntry` for blank text and
    /// `MindfulError::EntryTooLong` past the character limit.
    pub fn add<I, S>(
        &mut self,
        text: &str,
        mood: Option<Mood>,
        tags: I,
    ) -> Result<&JournalEntry, MindfulError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = validate_entry_text(text)?;
        self.entries.push(JournalEntry {
            written_at: Utc::now(),
            text,
            mood,
            tags: normalize_tags(tags),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Delete the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range.
    pub fn remove(&mut self, index: usize) -> Result<JournalEntry, MindfulError> {
        if index >= self.entries.len() {
            return Err(MindfulError::EntryNotFound(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Entries whose text or tags contain `query`, case-insensitively,
    /// with their positions in the journal.
    pub fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = (usize, &'a JournalEntry)> + 'a {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.matches(query))
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal() -> Journal {
        let mut journal = Journal::new();
        journal
            .add("Long walk by the river", Some(Mood::Good), ["Outdoors"])
            .unwrap();
        journal
            .add("Tough meeting at work", Some(Mood::Sad), ["work", "stress"])
            .unwrap();
        journal.add("Quiet evening", None, ["rest"]).unwrap();
        journal
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut journal = Journal::new();
        assert!(matches!(
            journal.add("  ", None, Vec::<String>::new()),
            Err(MindfulError::EmptyEntry)
        ));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_search_text_and_tags() {
        let journal = journal();

        let hits: Vec<(usize, &str)> = journal
            .search("RIVER")
            .map(|(i, e)| (i, e.text.as_str()))
            .collect();
        assert_eq!(hits, vec![(0, "Long walk by the river")]);

        let hits: Vec<(usize, &str)> = journal
            .search("stress")
            .map(|(i, e)| (i, e.text.as_str()))
            .collect();
        assert_eq!(hits, vec![(1, "Tough meeting at work")]);

        assert_eq!(journal.search("").count(), 3);
        assert_eq!(journal.search("nothing").count(), 0);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut journal = journal();
        let removed = journal.remove(1).unwrap();
        assert_eq!(removed.text, "Tough meeting at work");

        let texts: Vec<&str> = journal.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Long walk by the river", "Quiet evening"]);

        assert!(matches!(
            journal.remove(5),
            Err(MindfulError::EntryNotFound(5))
        ));
    }

    #[test]
    fn test_has_tag() {
        let journal = journal();
        assert!(journal.entries()[0].has_tag("#outdoors"));
        assert!(!journal.entries()[0].has_tag("work"));
    }
}
