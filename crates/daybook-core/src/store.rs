//! Task store abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{NewTask, Task};

/// Outcome of a store mutation that targets a single row by id.
///
/// The store reports explicitly whether a row matched; callers decide how a
/// miss surfaces (the HTTP layer maps it to 404).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Updated,
    Deleted,
    NotFound,
}

/// Persistence contract for tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Idempotently ensures the tasks table exists.
    async fn init_schema(&self) -> Result<(), DomainError>;

    /// Returns every task ordered by `(date, time)` ascending.
    async fn list_all(&self) -> Result<Vec<Task>, DomainError>;

    /// Persists a new row and returns the store-assigned id.
    async fn insert(&self, task: &NewTask) -> Result<i64, DomainError>;

    /// Sets one row's completed flag.
    async fn set_completed(&self, id: i64, completed: bool)
    -> Result<MutationOutcome, DomainError>;

    /// Removes one row.
    async fn delete_by_id(&self, id: i64) -> Result<MutationOutcome, DomainError>;
}
