//! Month grid generation and per-day event markers.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use daybook_core::error::DomainError;
use daybook_core::model::EventType;

/// Weekday header labels in the grid's column order, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day cell with its date tag and event markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// The cell's date tag.
    pub date: NaiveDate,
    /// One marker per event type present on this date; never duplicated.
    pub markers: Vec<EventType>,
}

impl DayCell {
    /// Zero-padded ISO date string (`YYYY-MM-DD`).
    #[must_use]
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A cell in the grid body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GridCell {
    /// Leading filler before the first day of the month.
    Blank,
    Day(DayCell),
}

/// A 7-column month grid: one header per weekday name, one leading blank
/// per weekday-offset of the month's first day, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Builds the grid for the given month. Pure function of `(year, month)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `(year, month)` does not name a
    /// representable month.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DomainError::Validation(format!("invalid year-month: {year}-{month}")))?;

        let leading_blanks = first.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![GridCell::Blank; leading_blanks];

        let mut date = first;
        while date.month() == month {
            cells.push(GridCell::Day(DayCell {
                day: date.day(),
                date,
                markers: Vec::new(),
            }));
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        Ok(Self { year, month, cells })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Weekday header labels for the grid's seven columns.
    #[must_use]
    pub const fn headers() -> [&'static str; 7] {
        WEEKDAY_NAMES
    }

    /// The grid body: leading blanks followed by day cells.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The cell tagged with `date`, if it falls inside this month.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find_map(|cell| match cell {
            GridCell::Day(day) if day.date == date => Some(day),
            _ => None,
        })
    }

    fn day_mut(&mut self, date: NaiveDate) -> Option<&mut DayCell> {
        self.cells.iter_mut().find_map(|cell| match cell {
            GridCell::Day(day) if day.date == date => Some(day),
            _ => None,
        })
    }

    /// Adds a marker for `(date, event_type)`. Marking the same pair again
    /// leaves exactly one marker; distinct event types on one date coexist.
    /// Dates outside this month are ignored.
    pub fn mark_event(&mut self, date: NaiveDate, event_type: EventType) {
        if let Some(cell) = self.day_mut(date) {
            if !cell.markers.contains(&event_type) {
                cell.markers.push(event_type);
            }
        }
    }

    /// Removes every marker from every cell. The reload path clears before
    /// re-marking from the full task list.
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            if let GridCell::Day(day) = cell {
                day.markers.clear();
            }
        }
    }
}
