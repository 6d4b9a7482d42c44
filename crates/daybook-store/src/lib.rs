//! Daybook Store — PostgreSQL persistence for tasks.

pub mod pg_task_store;
pub mod schema;
