//! Task model types.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Enumerated event category driving display-text formatting and calendar
/// marker styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Birthday,
    Meeting,
    Call,
    /// Fallback for anything outside the known set.
    Other,
}

impl EventType {
    /// Canonical wire/storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Meeting => "meeting",
            Self::Call => "call",
            Self::Other => "other",
        }
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        match value {
            "birthday" => Self::Birthday,
            "meeting" => Self::Meeting,
            "call" => Self::Call,
            _ => Self::Other,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted task/appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, unique for the task's lifetime.
    pub id: i64,
    /// The raw text the user typed (e.g. a person's name).
    pub text: String,
    /// Display string derived from `text` and `event_type`. Persisted, but
    /// always recomputed from the formatting rule on new writes.
    pub formatted_text: String,
    /// Plain calendar date, no time zone conversion.
    pub date: NaiveDate,
    /// Wall-clock time of day.
    pub time: NaiveTime,
    pub event_type: EventType,
    /// The only field mutable after creation.
    pub completed: bool,
    /// Store-assigned insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// A task before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub formatted_text: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub event_type: EventType,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_event_types_round_trip_their_names() {
        for et in [EventType::Birthday, EventType::Meeting, EventType::Call] {
            assert_eq!(EventType::from(et.as_str()), et);
        }
    }

    #[test]
    fn test_unknown_event_type_falls_back_to_other() {
        assert_eq!(EventType::from("picnic"), EventType::Other);
        assert_eq!(EventType::from(""), EventType::Other);
    }

    #[test]
    fn test_event_type_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&EventType::Birthday).unwrap();
        assert_eq!(json, "\"birthday\"");

        let parsed: EventType = serde_json::from_str("\"meeting\"").unwrap();
        assert_eq!(parsed, EventType::Meeting);
    }
}
