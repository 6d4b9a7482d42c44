//! Query handlers for tasks.

use daybook_core::error::DomainError;
use daybook_core::model::Task;
use daybook_core::store::TaskStore;

/// Returns every task ordered by `(date, time)` ascending. No filtering.
///
/// # Errors
///
/// Store failures pass through unchanged.
pub async fn list_tasks(store: &dyn TaskStore) -> Result<Vec<Task>, DomainError> {
    store.list_all().await
}
