//! Diagnostic HTML dump of the raw tasks table.

use std::fmt::Write as _;

use axum::response::Html;
use axum::routing::get;
use axum::{Router, extract::State};

use daybook_service::queries;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /check-data
async fn check_data(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    tracing::debug!("accessing /check-data");
    let tasks = queries::list_tasks(state.store.as_ref()).await?;

    let mut output = String::from("<h2>Tasks in Database:</h2>");
    if tasks.is_empty() {
        output.push_str("<p>No tasks found in database.</p>");
    } else {
        output.push_str(
            "<table border=\"1\" style=\"border-collapse: collapse; width: 100%;\">\
             <tr><th>ID</th><th>Text</th><th>Formatted Text</th><th>Date</th>\
             <th>Time</th><th>Event Type</th><th>Completed</th></tr>",
        );
        for task in &tasks {
            let _ = write!(
                output,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td></tr>",
                task.id,
                task.text,
                task.formatted_text,
                task.date,
                task.time,
                task.event_type,
                if task.completed { "Yes" } else { "No" }
            );
        }
        output.push_str("</table>");
    }
    let _ = write!(output, "<p>{} task(s) stored.</p>", tasks.len());

    Ok(Html(output))
}

/// Returns the diagnostic router.
pub fn router() -> Router<AppState> {
    Router::new().route("/check-data", get(check_data))
}
