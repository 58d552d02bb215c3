//! Text input rules shared by the journal, gratitude and mood logs.

use crate::error::MindfulError;

/// Maximum characters in a journal or gratitude entry.
pub const MAX_ENTRY_CHARS: usize = 500;

/// Validate free text for an entry.
///
/// Surrounding whitespace is trimmed. Blank text and text longer than
/// [`MAX_ENTRY_CHARS`] characters are rejected.
///
/// # Errors
///
/// Returns `MindfulError::EmptyEntry` or `MindfulError::EntryTooLong`.
pub fn validate_entry_text(text: &str) -> Result<String, MindfulError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MindfulError::EmptyEntry);
    }

    let len = trimmed.chars().count();
    if len > MAX_ENTRY_CHARS {
        return Err(MindfulError::EntryTooLong {
            len,
            max: MAX_ENTRY_CHARS,
        });
    }

    Ok(trimmed.to_string())
}

/// Normalize user tags.
///
/// Tags are trimmed, stripped of a leading `#`, lower-cased and
/// de-duplicated keeping the first occurrence. Empty tags are dropped.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Split typed input into text and `#hashtags`.
///
/// Words starting with `#` become tags (still prefixed; see
/// [`normalize_tags`]); every other word is kept as text, single-spaced.
#[must_use]
pub fn split_hashtags(input: &str) -> (String, Vec<String>) {
    let (tags, words): (Vec<&str>, Vec<&str>) = input
        .split_whitespace()
        .partition(|word| word.len() > 1 && word.starts_with('#'));
    (
        words.join(" "),
        tags.into_iter().map(ToString::to_string).collect(),
    )
}
