//! Command implementations for wellb.

mod calendar;
mod day;
mod stats;

pub use calendar::calendar;
pub use day::{clear, log, show};
pub use stats::stats;

use chrono::{Local, NaiveDate};

use crate::error::WellbError;

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
fn parse_date_arg(arg: Option<&str>) -> Result<NaiveDate, WellbError> {
    arg.map_or_else(
        || Ok(Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| WellbError::Parse(format!("Invalid date '{s}' (expected YYYY-MM-DD)")))
        },
    )
}

/// Parse an optional `YYYY-MM` argument into the first of that month,
/// defaulting to the current month.
fn parse_month_arg(arg: Option<&str>) -> Result<NaiveDate, WellbError> {
    arg.map_or_else(
        || Ok(Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                .map_err(|_| WellbError::Parse(format!("Invalid month '{s}' (expected YYYY-MM)")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        let date = parse_date_arg(Some("2024-05-01")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(parse_date_arg(Some("05/01/2024")).is_err());
        assert_eq!(parse_date_arg(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_month_arg() {
        let date = parse_month_arg(Some("2024-05")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(parse_month_arg(Some("2024")).is_err());
        assert!(parse_month_arg(Some("2024-13")).is_err());
    }
}
