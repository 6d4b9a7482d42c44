//! Command handlers for tasks.
//!
//! This module contains the application-level write path: validate the
//! payload, derive the display text, and forward to the store.

use chrono::{NaiveDate, NaiveTime};
use daybook_core::error::DomainError;
use daybook_core::format::format_display_text;
use daybook_core::model::{EventType, NewTask};
use daybook_core::store::{MutationOutcome, TaskStore};

/// Create-task payload as received from the transport, before validation.
/// Date and time arrive as the raw strings the client submitted.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub text: String,
    pub date: String,
    pub time: String,
    pub event_type: String,
    pub completed: bool,
}

fn require_non_empty(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "missing required field: {field}"
        )));
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DomainError::Validation(format!("invalid date: {raw}")))
}

// The form submits HH:MM; the store echoes HH:MM:SS. Accept both.
fn parse_time(raw: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| DomainError::Validation(format!("invalid time: {raw}")))
}

/// Validates the payload, derives the display text from
/// `{text, event_type}`, and inserts the task. Returns the store-assigned
/// id. Any client-supplied display text is ignored; the formatting rule is
/// the single source of truth.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a required field is missing/empty or
/// the date/time do not parse. Store failures pass through unchanged.
pub async fn create_task(command: &CreateTask, store: &dyn TaskStore) -> Result<i64, DomainError> {
    require_non_empty(&command.text, "text")?;
    require_non_empty(&command.date, "date")?;
    require_non_empty(&command.time, "time")?;
    require_non_empty(&command.event_type, "eventType")?;

    let date = parse_date(&command.date)?;
    let time = parse_time(&command.time)?;
    let event_type = EventType::from(command.event_type.as_str());

    let task = NewTask {
        text: command.text.clone(),
        formatted_text: format_display_text(&command.text, event_type),
        date,
        time,
        event_type,
        completed: command.completed,
    };

    store.insert(&task).await
}

/// Sets a task's completed flag.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no task has the given id; store
/// failures pass through unchanged.
pub async fn complete_task(
    id: i64,
    completed: bool,
    store: &dyn TaskStore,
) -> Result<(), DomainError> {
    match store.set_completed(id, completed).await? {
        MutationOutcome::NotFound => Err(DomainError::NotFound(id)),
        MutationOutcome::Updated | MutationOutcome::Deleted => Ok(()),
    }
}

/// Deletes a task by id. Irreversible.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no task has the given id; store
/// failures pass through unchanged.
pub async fn delete_task(id: i64, store: &dyn TaskStore) -> Result<(), DomainError> {
    match store.delete_by_id(id).await? {
        MutationOutcome::NotFound => Err(DomainError::NotFound(id)),
        MutationOutcome::Updated | MutationOutcome::Deleted => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_test_support::{FailingTaskStore, InMemoryTaskStore};

    fn valid_command() -> CreateTask {
        CreateTask {
            text: "Alice".to_owned(),
            date: "2026-04-01".to_owned(),
            time: "09:30".to_owned(),
            event_type: "birthday".to_owned(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_create_task_inserts_with_derived_display_text() {
        let store = InMemoryTaskStore::new();

        let id = create_task(&valid_command(), &store).await.unwrap();

        let tasks = store.snapshot();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].formatted_text, "Alice's Birthday");
        assert_eq!(tasks[0].event_type, EventType::Birthday);
        assert!(!tasks[0].completed);
    }

    #[tokio::test]
    async fn test_create_task_rejects_each_missing_field() {
        let store = InMemoryTaskStore::new();

        for field in ["text", "date", "time", "event_type"] {
            let mut command = valid_command();
            match field {
                "text" => command.text.clear(),
                "date" => command.date.clear(),
                "time" => command.time.clear(),
                _ => command.event_type.clear(),
            }

            let err = create_task(&command, &store).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(_)),
                "expected Validation for empty {field}, got {err:?}"
            );
        }
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_create_task_rejects_unparseable_date_and_time() {
        let store = InMemoryTaskStore::new();

        let mut command = valid_command();
        command.date = "01/04/2026".to_owned();
        assert!(matches!(
            create_task(&command, &store).await.unwrap_err(),
            DomainError::Validation(_)
        ));

        let mut command = valid_command();
        command.time = "half past nine".to_owned();
        assert!(matches!(
            create_task(&command, &store).await.unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_create_task_accepts_seconds_in_time() {
        let store = InMemoryTaskStore::new();
        let mut command = valid_command();
        command.time = "09:30:15".to_owned();

        create_task(&command, &store).await.unwrap();

        assert_eq!(store.snapshot()[0].time.format("%H:%M:%S").to_string(), "09:30:15");
    }

    #[tokio::test]
    async fn test_create_task_unknown_event_type_keeps_text_verbatim() {
        let store = InMemoryTaskStore::new();
        let mut command = valid_command();
        command.text = "water the plants".to_owned();
        command.event_type = "chore".to_owned();

        create_task(&command, &store).await.unwrap();

        let tasks = store.snapshot();
        assert_eq!(tasks[0].event_type, EventType::Other);
        assert_eq!(tasks[0].formatted_text, "water the plants");
    }

    #[tokio::test]
    async fn test_complete_task_propagates_not_found() {
        let store = InMemoryTaskStore::new();

        let err = complete_task(42, true, &store).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_complete_task_updates_existing_row() {
        let store = InMemoryTaskStore::new();
        let id = create_task(&valid_command(), &store).await.unwrap();

        complete_task(id, true, &store).await.unwrap();

        assert!(store.snapshot()[0].completed);
    }

    #[tokio::test]
    async fn test_delete_task_propagates_not_found() {
        let store = InMemoryTaskStore::new();
        let id = create_task(&valid_command(), &store).await.unwrap();

        delete_task(id, &store).await.unwrap();
        let err = delete_task(id, &store).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_passes_through_unchanged() {
        let store = FailingTaskStore;

        let err = create_task(&valid_command(), &store).await.unwrap_err();

        assert!(matches!(err, DomainError::Infrastructure(_)));
    }
}
