//! Task list view model.
//!
//! Mirrors the visible list's state machine without a DOM: one row per
//! persisted task. Every mutation talks to the server first and changes the
//! visible state only after a confirmed success, so the list never diverges
//! from the store silently.

use chrono::{NaiveDate, NaiveTime};
use daybook_calendar::MonthGrid;
use daybook_core::format::format_display_text;
use daybook_core::model::{EventType, Task};

use crate::api_client::{ApiClient, ClientError, NewTaskPayload};

/// Placeholder text for the entry field, per selected event type.
#[must_use]
pub const fn input_placeholder(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Birthday => "Enter person's name",
        EventType::Meeting => "Meeting with whom?",
        EventType::Call => "Call with whom?",
        EventType::Other => "Enter a task",
    }
}

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: i64,
    pub formatted_text: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub event_type: EventType,
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            formatted_text: task.formatted_text.clone(),
            date: task.date,
            time: task.time,
            event_type: task.event_type,
            completed: task.completed,
        }
    }
}

/// What the add form submits: raw field strings plus the chosen type.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub text: String,
    pub date: String,
    pub time: String,
    pub event_type: EventType,
}

/// The visible task list. Calendar markers are maintained on the grid the
/// caller passes in, so list and calendar stay in step.
#[derive(Debug, Default)]
pub struct TaskListView {
    rows: Vec<TaskRow>,
}

impl TaskListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible rows, in the server's `(date, time)` order after a load.
    #[must_use]
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    /// Fetches the full task list and rebuilds rows and calendar markers
    /// from scratch.
    ///
    /// # Errors
    ///
    /// On any client error the previous rows and markers are kept.
    pub async fn load(
        &mut self,
        client: &ApiClient,
        grid: &mut MonthGrid,
    ) -> Result<(), ClientError> {
        let tasks = client.list_tasks().await?;

        self.rows = tasks.iter().map(TaskRow::from).collect();
        grid.clear_marks();
        for task in &tasks {
            grid.mark_event(task.date, task.event_type);
        }
        Ok(())
    }

    /// Validates the form locally, then creates the task server-side. The
    /// row and its calendar marker appear only once the server confirms and
    /// returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` without any network call if a field
    /// is empty or the date/time do not parse; otherwise propagates the
    /// client error, leaving the list untouched.
    pub async fn add(
        &mut self,
        client: &ApiClient,
        grid: &mut MonthGrid,
        form: &TaskForm,
    ) -> Result<i64, ClientError> {
        let text = form.text.trim();
        let date_raw = form.date.trim();
        let time_raw = form.time.trim();
        if text.is_empty() || date_raw.is_empty() || time_raw.is_empty() {
            return Err(ClientError::Validation(
                "please enter all required information".to_owned(),
            ));
        }

        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ClientError::Validation(format!("invalid date: {date_raw}")))?;
        let time = NaiveTime::parse_from_str(time_raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time_raw, "%H:%M"))
            .map_err(|_| ClientError::Validation(format!("invalid time: {time_raw}")))?;

        let formatted_text = format_display_text(text, form.event_type);
        let payload = NewTaskPayload {
            text: text.to_owned(),
            formatted_text: formatted_text.clone(),
            date: date_raw.to_owned(),
            time: time_raw.to_owned(),
            event_type: form.event_type,
            completed: false,
        };

        let id = client.create_task(&payload).await?;

        self.rows.push(TaskRow {
            id,
            formatted_text,
            date,
            time,
            event_type: form.event_type,
            completed: false,
        });
        grid.mark_event(date, form.event_type);
        Ok(id)
    }

    /// Sends the flipped completed flag for the given row; the visible state
    /// flips only after the server confirms. Returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if no row carries the id; otherwise
    /// propagates the client error, leaving the row unchanged.
    pub async fn toggle_completed(
        &mut self,
        client: &ApiClient,
        id: i64,
    ) -> Result<bool, ClientError> {
        let Some(pos) = self.rows.iter().position(|row| row.id == id) else {
            return Err(ClientError::Validation(format!(
                "no visible row for task {id}"
            )));
        };
        let target = !self.rows[pos].completed;

        client.set_completed(id, target).await?;

        self.rows[pos].completed = target;
        Ok(target)
    }

    /// Deletes the task server-side; the row disappears and the calendar
    /// markers are rebuilt from the remaining rows only after the server
    /// confirms.
    ///
    /// # Errors
    ///
    /// Propagates the client error, leaving rows and markers unchanged.
    pub async fn remove(
        &mut self,
        client: &ApiClient,
        grid: &mut MonthGrid,
        id: i64,
    ) -> Result<(), ClientError> {
        client.delete_task(id).await?;

        self.rows.retain(|row| row.id != id);
        grid.clear_marks();
        for row in &self.rows {
            grid.mark_event(row.date, row.event_type);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_follows_event_type() {
        assert_eq!(input_placeholder(EventType::Birthday), "Enter person's name");
        assert_eq!(input_placeholder(EventType::Meeting), "Meeting with whom?");
        assert_eq!(input_placeholder(EventType::Call), "Call with whom?");
        assert_eq!(input_placeholder(EventType::Other), "Enter a task");
    }

    #[tokio::test]
    async fn test_add_rejects_empty_fields_without_network() {
        // The URL is never dialled: validation fails first.
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut grid = MonthGrid::new(2026, 4).unwrap();
        let mut view = TaskListView::new();

        let form = TaskForm {
            text: String::new(),
            date: "2026-04-01".to_owned(),
            time: "09:30".to_owned(),
            event_type: EventType::Birthday,
        };

        let err = view.add(&client, &mut grid, &form).await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_malformed_date_without_network() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut grid = MonthGrid::new(2026, 4).unwrap();
        let mut view = TaskListView::new();

        let form = TaskForm {
            text: "Alice".to_owned(),
            date: "April 1st".to_owned(),
            time: "09:30".to_owned(),
            event_type: EventType::Birthday,
        };

        let err = view.add(&client, &mut grid, &form).await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_toggle_unknown_row_is_a_validation_error() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut view = TaskListView::new();

        let err = view.toggle_completed(&client, 42).await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
    }
}
