//! Daybook Calendar — month-grid view model.
//!
//! A pure rendering model: building a grid never touches the network; the
//! client re-marks it from the full task list on every reload.

mod grid;

pub use grid::{DayCell, GridCell, MonthGrid, WEEKDAY_NAMES};
