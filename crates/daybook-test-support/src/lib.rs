//! Shared test fakes for the Daybook calendar/task tracker.

mod store;

pub use store::{FailingTaskStore, InMemoryTaskStore};
