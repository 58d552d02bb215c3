//! Mood tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{normalize_tags, validate_entry_text, Entry};
use crate::error::MindfulError;

/// Five-point mood scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// 😭
    Awful,
    /// 😢
    Sad,
    /// 😐
    #[default]
    Neutral,
    /// 🙂
    Good,
    /// 😄
    Great,
}

impl Mood {
    /// All moods from lowest to highest.
    pub const ALL: [Self; 5] = [
        Self::Awful,
        Self::Sad,
        Self::Neutral,
        Self::Good,
        Self::Great,
    ];

    /// Score from 0 (awful) to 4 (great).
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Awful => 0,
            Self::Sad => 1,
            Self::Neutral => 2,
            Self::Good => 3,
            Self::Great => 4,
        }
    }

    /// Mood for a score, if in range.
    #[must_use]
    pub const fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => Some(Self::Awful),
            1 => Some(Self::Sad),
            2 => Some(Self::Neutral),
            3 => Some(Self::Good),
            4 => Some(Self::Great),
            _ => None,
        }
    }

    /// Emoji shown in the picker.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Awful => "😭",
            Self::Sad => "😢",
            Self::Neutral => "😐",
            Self::Good => "🙂",
            Self::Great => "😄",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Awful => "Awful",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
            Self::Good => "Good",
            Self::Great => "Great",
        };
        write!(f, "{} {name}", self.emoji())
    }
}

/// A single mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// When the mood was recorded
    pub recorded_at: DateTime<Utc>,
    /// The mood
    pub mood: Mood,
    /// Optional note
    pub note: Option<String>,
    /// Normalized tags
    pub tags: Vec<String>,
}

impl Entry for MoodEntry {
    fn text(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn written_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Aggregate view of the mood log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    /// Number of check-ins
    pub count: usize,
    /// Mean score, if any check-ins exist
    pub average: Option<f64>,
    /// Most frequent mood; ties go to the higher mood
    pub most_common: Option<Mood>,
}

/// In-memory mood log, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a mood with an optional note.
    ///
    /// A blank note is stored as no note.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryTooLong` if the note is past the
    /// character limit.
    pub fn record<I, S>(
        &mut self,
        mood: Mood,
        note: Option<&str>,
        tags: I,
    ) -> Result<&MoodEntry, MindfulError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let note = note
            .filter(|n| !n.trim().is_empty())
            .map(validate_entry_text)
            .transpose()?;
        self.entries.push(MoodEntry {
            recorded_at: Utc::now(),
            mood,
            note,
            tags: normalize_tags(tags),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::EntryNotFound` if out of range.
    pub fn remove(&mut self, index: usize) -> Result<MoodEntry, MindfulError> {
        if index >= self.entries.len() {
            return Err(MindfulError::EntryNotFound(index));
        }
        Ok(self.entries.remove(index))
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
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

    /// Count, average score and most frequent mood.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> MoodSummary {
        if self.entries.is_empty() {
            return MoodSummary {
                count: 0,
                average: None,
                most_common: None,
            };
        }

        let mut counts = [0usize; 5];
        let mut total = 0u64;
        for entry in &self.entries {
            counts[usize::from(entry.mood.score())] += 1;
            total += u64::from(entry.mood.score());
        }

        let most_common = Mood::ALL
            .into_iter()
            .max_by_key(|m| counts[usize::from(m.score())]);

        MoodSummary {
            count: self.entries.len(),
            average: Some(total as f64 / self.entries.len() as f64),
            most_common,
        }
    }
}
