//! JSON output formatting for mindful.

use serde::Serialize;
use serde_json::json;

use crate::error::MindfulError;
use crate::features::resources::Resource;

/// Format affirmations as JSON
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_affirmations_json(items: &[&str]) -> Result<String, MindfulError> {
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format resources as JSON
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_resources_json(resources: &[Resource]) -> Result<String, MindfulError> {
    let items: Vec<_> = resources
        .iter()
        .map(|r| {
            json!({
                "title": r.title,
                "description": r.description,
                "link": r.link,
                "kind": r.contact_kind(),
            })
        })
        .collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value to pretty JSON
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, MindfulError> {
    Ok(serde_json::to_string_pretty(value)?)
}
