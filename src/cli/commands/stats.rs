//! Statistics command implementation.

use chrono::{Datelike, NaiveDate};

use super::parse_month_arg;
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::error::WellbError;
use crate::features::stats::Summary;
use crate::output::{format_summary_json, format_summary_pretty};
use crate::storage::WellnessStore;

/// Show summary statistics for a month or all-time.
pub fn stats(
    store: &WellnessStore,
    args: &StatsArgs,
    format: OutputFormat,
) -> Result<String, WellbError> {
    let (scope, summary) = if args.all {
        ("All time".to_string(), Summary::all_time(store))
    } else {
        let reference = parse_month_arg(args.month.as_deref())?;
        (
            month_title(reference),
            Summary::for_month(store, reference.year(), reference.month()),
        )
    };

    match format {
        OutputFormat::Json => format_summary_json(&scope, &summary),
        OutputFormat::Pretty => Ok(format_summary_pretty(&scope, &summary)),
    }
}

fn month_title(reference: NaiveDate) -> String {
    reference.format("%B %Y").to_string()
}
