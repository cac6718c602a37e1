//! Core abstractions for wellb.
//!
//! This module provides the calendar grid, the wellness record model,
//! and the day-editor session shared across commands.

pub mod calendar;
mod editor;
mod record;

pub use calendar::{CalendarDay, MonthGrid};
pub use editor::{EditBuffer, EditorSession};
pub use record::{date_key, parse_date_key, WellnessRecord, DEFAULT_STEPS_GOAL, DEFAULT_WATER_GOAL};
