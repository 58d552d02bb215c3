//! Gratitude log.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{normalize_tags, validate_entry_text, Entry};
use crate::error::MindfulError;

/// Something the user is grateful for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeEntry {
    /// When the entry was written or last edited
    pub written_at: DateTime<Utc>,
    /// Entry text, trimmed
    pub text: String,
    /// Normalized tags
    pub tags: Vec<String>,
}

impl GratitudeEntry {
    fn build<I, S>(text: &str, tags: I) -> Result<Self, MindfulError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            written_at: Utc::now(),
            text: validate_entry_text(text)?,
            tags: normalize_tags(tags),
        })
    }
}

impl Entry for GratitudeEntry {
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

/// In-memory gratitude log, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GratitudeLog {
    entries: Vec<GratitudeEntry>,
}

impl GratitudeLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EmptyEntry` or `MindfulError::EntryTooLong`.
    pub fn add<I, S>(&mut self, text: &str, tags: I) -> Result<&GratitudeEntry, MindfulError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = GratitudeEntry::build(text, tags)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the entry at `index`, refreshing its timestamp.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range, or a text
    /// validation error. The existing entry is untouched on error.
    pub fn edit<I, S>(
        &mut self,
        index: usize,
        text: &str,
        tags: I,
    ) -> Result<&GratitudeEntry, MindfulError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if index >= self.entries.len() {
            return Err(MindfulError::EntryNotFound(index));
        }
        let entry = GratitudeEntry::build(text, tags)?;
        self.entries[index] = entry;
        Ok(&self.entries[index])
    }

    /// Delete the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range.
    pub fn remove(&mut self, index: usize) -> Result<GratitudeEntry, MindfulError> {
        if index >= self.entries.len() {
            return Err(MindfulError::EntryNotFound(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Entries written on a local calendar day.
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &GratitudeEntry> {
        self.entries.iter().filter(move |e| e.local_date() == date)
    }

    /// How many entries carry each tag.
    #[must_use]
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.entries.iter().flat_map(|e| e.tags.iter()) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[GratitudeEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
