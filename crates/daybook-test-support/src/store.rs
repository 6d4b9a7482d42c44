//! Test stores — in-memory and failing `TaskStore` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use daybook_core::error::DomainError;
use daybook_core::model::{NewTask, Task};
use daybook_core::store::{MutationOutcome, TaskStore};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    tasks: Vec<Task>,
}

/// A `TaskStore` backed by a `Vec`, with sequential id assignment starting
/// at 1. Listing applies the same `(date, time)` ordering the SQL store
/// guarantees; ties keep insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    inner: Mutex<Inner>,
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the stored tasks in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn init_schema(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Task>, DomainError> {
        let mut tasks = self.inner.lock().unwrap().tasks.clone();
        tasks.sort_by_key(|t| (t.date, t.time));
        Ok(tasks)
    }

    async fn insert(&self, task: &NewTask) -> Result<i64, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.tasks.push(Task {
            id,
            text: task.text.clone(),
            formatted_text: task.formatted_text.clone(),
            date: task.date,
            time: task.time,
            event_type: task.event_type,
            completed: task.completed,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn set_completed(
        &self,
        id: i64,
        completed: bool,
    ) -> Result<MutationOutcome, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = completed;
                Ok(MutationOutcome::Updated)
            }
            None => Ok(MutationOutcome::NotFound),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<MutationOutcome, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        if inner.tasks.len() < before {
            Ok(MutationOutcome::Deleted)
        } else {
            Ok(MutationOutcome::NotFound)
        }
    }
}

/// A `TaskStore` whose every operation returns an infrastructure error.
/// Useful for testing error-handling paths.
#[derive(Debug, Default)]
pub struct FailingTaskStore;

impl FailingTaskStore {
    fn unavailable() -> DomainError {
        DomainError::Infrastructure("connection refused".into())
    }
}

#[async_trait]
impl TaskStore for FailingTaskStore {
    async fn init_schema(&self) -> Result<(), DomainError> {
        Err(Self::unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Task>, DomainError> {
        Err(Self::unavailable())
    }

    async fn insert(&self, _task: &NewTask) -> Result<i64, DomainError> {
        Err(Self::unavailable())
    }

    async fn set_completed(
        &self,
        _id: i64,
        _completed: bool,
    ) -> Result<MutationOutcome, DomainError> {
        Err(Self::unavailable())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<MutationOutcome, DomainError> {
        Err(Self::unavailable())
    }
}
