//! Daybook API — axum HTTP surface for the task service.

pub mod error;
pub mod routes;
pub mod state;
