//! Display-text derivation.
//!
//! The formatting rule is the single source of truth for `formatted_text`:
//! the service applies it on every write, and the client applies the same
//! rule when it builds a list row before the server confirms the insert.
//! `strip_display_text` is the exact inverse for the three decorated types.

use crate::model::EventType;

/// Derives the display string for a task from its raw text and event type.
#[must_use]
pub fn format_display_text(text: &str, event_type: EventType) -> String {
    match event_type {
        EventType::Birthday => format!("{text}'s Birthday"),
        EventType::Meeting => format!("Meeting with {text}"),
        EventType::Call => format!("Call with {text}"),
        EventType::Other => text.to_owned(),
    }
}

/// Recovers the raw text from a formatted display string.
///
/// Returns the input unchanged if the expected decoration is absent.
#[must_use]
pub fn strip_display_text(formatted: &str, event_type: EventType) -> String {
    let stripped = match event_type {
        EventType::Birthday => formatted.strip_suffix("'s Birthday"),
        EventType::Meeting => formatted.strip_prefix("Meeting with "),
        EventType::Call => formatted.strip_prefix("Call with "),
        EventType::Other => None,
    };
    stripped.unwrap_or(formatted).to_owned()
}
