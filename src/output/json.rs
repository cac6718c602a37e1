//! JSON output formatting for wellb.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::core::{date_key, MonthGrid, WellnessRecord};
use crate::error::WellbError;
use crate::features::stats::Summary;

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `WellbError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, WellbError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a month grid as JSON.
///
/// # Errors
///
/// Returns `WellbError::Parse` if JSON serialization fails.
pub fn format_calendar_json(grid: &MonthGrid) -> Result<String, WellbError> {
    let output = json!({
        "year": grid.year,
        "month": grid.month,
        "days": grid.month_days().count(),
        "weeks": grid.weeks,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format one day's data as JSON.
///
/// # Errors
///
/// Returns `WellbError::Parse` if JSON serialization fails.
pub fn format_day_json(
    date: NaiveDate,
    record: &WellnessRecord,
    has_entry: bool,
) -> Result<String, WellbError> {
    let output = json!({
        "date": date_key(date),
        "entry": has_entry,
        "record": record,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a summary as JSON.
///
/// # Errors
///
/// Returns `WellbError::Parse` if JSON serialization fails.
pub fn format_summary_json(scope: &str, summary: &Summary) -> Result<String, WellbError> {
    let output = json!({
        "scope": scope,
        "summary": summary,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
