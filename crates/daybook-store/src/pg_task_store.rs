//! `PostgreSQL` implementation of the `TaskStore` trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;

use daybook_core::error::DomainError;
use daybook_core::model::{EventType, NewTask, Task};
use daybook_core::store::{MutationOutcome, TaskStore};

use crate::schema;

/// PostgreSQL-backed task store.
#[derive(Debug, Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    /// Creates a new `PgTaskStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape as read from the database. `event_type` stays a string until
/// converted into the domain enum.
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: i64,
    text: String,
    formatted_text: String,
    date: NaiveDate,
    time: NaiveTime,
    event_type: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            formatted_text: row.formatted_text,
            date: row.date,
            time: row.time,
            event_type: EventType::from(row.event_type),
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

fn store_error(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn init_schema(&self) -> Result<(), DomainError> {
        sqlx::query(schema::CREATE_TASKS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        tracing::info!("tasks table ready");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Task>, DomainError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT id, text, formatted_text, date, time, event_type, completed, created_at \
             FROM tasks ORDER BY date, time",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, task: &NewTask) -> Result<i64, DomainError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tasks (text, formatted_text, date, time, event_type, completed) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&task.text)
        .bind(&task.formatted_text)
        .bind(task.date)
        .bind(task.time)
        .bind(task.event_type.as_str())
        .bind(task.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(id)
    }

    async fn set_completed(
        &self,
        id: i64,
        completed: bool,
    ) -> Result<MutationOutcome, DomainError> {
        let result = sqlx::query("UPDATE tasks SET completed = $1 WHERE id = $2")
            .bind(completed)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            Ok(MutationOutcome::NotFound)
        } else {
            Ok(MutationOutcome::Updated)
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<MutationOutcome, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            Ok(MutationOutcome::NotFound)
        } else {
            Ok(MutationOutcome::Deleted)
        }
    }
}
