//! Task CRUD routes.

use std::fmt::Write as _;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use daybook_core::error::DomainError;
use daybook_core::model::{EventType, Task};
use daybook_service::{commands, queries};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /api/tasks`. Every field is optional at the serde level so
/// a missing one maps to a 400 validation error rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskRequest {
    text: Option<String>,
    /// Required on the wire for compatibility with existing clients; the
    /// stored value is recomputed server-side from `text` and `event_type`.
    formatted_text: Option<String>,
    date: Option<String>,
    time: Option<String>,
    event_type: Option<String>,
    completed: Option<bool>,
}

/// Body of `PUT /api/tasks/{id}`.
#[derive(Debug, Deserialize)]
struct UpdateTaskRequest {
    completed: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// GET /api/tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = queries::list_tasks(state.store.as_ref()).await?;
    tracing::debug!(count = tasks.len(), "listed tasks");
    Ok(Json(tasks))
}

/// POST /api/tasks
async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let any_missing = [
        body.text.as_deref(),
        body.formatted_text.as_deref(),
        body.date.as_deref(),
        body.time.as_deref(),
        body.event_type.as_deref(),
    ]
    .iter()
    .any(|field| field.is_none_or(|value| value.trim().is_empty()));

    if any_missing {
        return Err(ApiError(DomainError::Validation(
            "missing required fields".to_owned(),
        )));
    }

    let command = commands::CreateTask {
        text: body.text.unwrap_or_default(),
        date: body.date.unwrap_or_default(),
        time: body.time.unwrap_or_default(),
        event_type: body.event_type.unwrap_or_default(),
        completed: body.completed.unwrap_or(false),
    };

    let id = commands::create_task(&command, state.store.as_ref()).await?;
    tracing::info!(id, "task created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/tasks/{id}
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let completed = body.completed.ok_or_else(|| {
        DomainError::Validation("missing required field: completed".to_owned())
    })?;

    commands::complete_task(id, completed, state.store.as_ref()).await?;

    Ok(Json(MessageResponse {
        message: "Task updated successfully",
    }))
}

/// DELETE /api/tasks/{id}
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    commands::delete_task(id, state.store.as_ref()).await?;

    Ok(Json(MessageResponse {
        message: "Task deleted successfully",
    }))
}

/// Debug row: the stored fields with `completed` rendered as Yes/No.
#[derive(Debug, Serialize)]
struct DebugTaskRow {
    id: i64,
    text: String,
    formatted_text: String,
    date: NaiveDate,
    time: NaiveTime,
    event_type: EventType,
    completed: &'static str,
    created_at: DateTime<Utc>,
}

impl From<Task> for DebugTaskRow {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            formatted_text: task.formatted_text,
            date: task.date,
            time: task.time,
            event_type: task.event_type,
            completed: if task.completed { "Yes" } else { "No" },
            created_at: task.created_at,
        }
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render_debug_table(rows: &[DebugTaskRow]) -> String {
    let mut html = String::from(
        "<h1>Stored Tasks</h1>\
         <table border=\"1\"><tr><th>ID</th><th>Text</th><th>Formatted Text</th>\
         <th>Date</th><th>Time</th><th>Event Type</th><th>Completed</th>\
         <th>Created At</th></tr>",
    );
    for row in rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td></tr>",
            row.id,
            row.text,
            row.formatted_text,
            row.date,
            row.time,
            row.event_type,
            row.completed,
            row.created_at
        );
    }
    html.push_str("</table>");
    html
}

/// GET /api/tasks/debug — JSON list, or an HTML table when the caller's
/// Accept header prefers HTML.
async fn debug_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let rows: Vec<DebugTaskRow> = queries::list_tasks(state.store.as_ref())
        .await?
        .into_iter()
        .map(DebugTaskRow::from)
        .collect();

    if wants_html(&headers) {
        Ok(Html(render_debug_table(&rows)).into_response())
    } else {
        Ok(Json(rows).into_response())
    }
}

/// Returns the task router. The static `/api/tasks/debug` route takes
/// priority over the `{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/debug", get(debug_tasks))
        .route(
            "/api/tasks/{id}",
            axum::routing::put(update_task).delete(delete_task),
        )
}
