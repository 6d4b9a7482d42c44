//! Daybook Service — application layer between transport payloads and the
//! task store.
//!
//! Command handlers validate incoming payloads and derive the display text;
//! query handlers are read-only passthroughs. Both operate on a
//! `&dyn TaskStore` so the HTTP surface and tests inject the store handle.

pub mod commands;
pub mod queries;
