//! Shared traits for logged entries.
//!
//! Mood, journal and gratitude entries all carry text, tags and a timestamp.
//! This trait gives them common search and date filtering.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// A timestamped, taggable entry.
pub trait Entry {
    /// Free text of the entry. May be empty for entries with optional notes.
    fn text(&self) -> &str;

    /// Normalized tags.
    fn tags(&self) -> &[String];

    /// When the entry was written.
    fn written_at(&self) -> DateTime<Utc>;

    /// Local calendar day the entry was written.
    fn local_date(&self) -> NaiveDate {
        self.written_at().with_timezone(&Local).date_naive()
    }

    /// Check if the text or any tag contains `query` (case-insensitive).
    ///
    /// An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.text().to_lowercase().contains(&needle)
            || self.tags().iter().any(|t| t.contains(&needle))
    }

    /// Check if the entry carries `tag`.
    fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().trim_start_matches('#');
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Day formatted as `d/m/yyyy`.
    fn display_date(&self) -> String {
        self.local_date().format("%-d/%-m/%Y").to_string()
    }
}
