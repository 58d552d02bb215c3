//! Saved breathing sessions.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::phase::{Phase, PhaseConfig};

/// Snapshot of a breathing session at the moment the user saved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Pattern in effect when saved
    pub config: PhaseConfig,
    /// Seconds elapsed in the current phase when saved
    pub completed_elapsed: u32,
    /// Phase the cycle was in when saved
    pub phase: Phase,
    /// Full cycles completed since the last reset
    pub cycles: u32,
    /// When the session was saved
    pub saved_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(config: PhaseConfig, completed_elapsed: u32, phase: Phase, cycles: u32) -> Self {
        Self {
            config,
            completed_elapsed,
            phase,
            cycles,
            saved_at: Utc::now(),
        }
    }

    /// Saved time in the local timezone.
    #[must_use]
    pub fn saved_at_local(&self) -> DateTime<Local> {
        self.saved_at.with_timezone(&Local)
    }

    /// One-line summary for history listings.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Inhale: {}s | Hold: {}s | Exhale: {}s | Time: {}s",
            self.config.inhale(),
            self.config.hold(),
            self.config.exhale(),
            self.completed_elapsed
        )
    }
}

/// Ordered, append-only log of saved sessions.
///
/// Records are never edited or removed one by one; the only removal is
/// [`SessionHistory::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
}

impl SessionHistory {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record and return a reference to it.
    pub fn append(&mut self, record: SessionRecord) -> &SessionRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&SessionRecord> {
        self.records.last()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no sessions have been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }

    /// Iterate records oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, SessionRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a SessionRecord;
    type IntoIter = std::slice::Iter<'a, SessionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
