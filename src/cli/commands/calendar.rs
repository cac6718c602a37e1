//! Calendar command implementation.

use chrono::Local;

use super::parse_month_arg;
use crate::cli::args::{CalendarArgs, OutputFormat};
use crate::config::Config;
use crate::core::calendar::{shift_month, MonthGrid};
use crate::error::WellbError;
use crate::output::{format_calendar_json, format_calendar_pretty};
use crate::storage::WellnessStore;

/// Render a month's calendar grid.
pub fn calendar(
    store: &WellnessStore,
    config: &Config,
    args: &CalendarArgs,
    format: OutputFormat,
) -> Result<String, WellbError> {
    let mut reference = parse_month_arg(args.month.as_deref())?;

    let back = i64::from(args.prev.unwrap_or(0));
    let forward = i64::from(args.next.unwrap_or(0));
    #[allow(clippy::cast_possible_truncation)]
    let offset = (forward - back) as i32;
    if offset != 0 {
        reference = shift_month(reference, offset);
    }

    let fill = args.fill || config.calendar.fill_adjacent;
    let today = Local::now().date_naive();
    let grid = MonthGrid::generate(reference, today, fill);

    match format {
        OutputFormat::Json => format_calendar_json(&grid),
        OutputFormat::Pretty => Ok(format_calendar_pretty(&grid, store)),
    }
}
