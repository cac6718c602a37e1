//! Monthly calendar grid generation.
//!
//! Produces a Monday-based 7-column grid for a reference month. Two
//! variants exist: a padded grid whose out-of-month slots are empty, and
//! a filled grid whose out-of-month slots hold real adjacent-month days
//! marked as not belonging to the displayed month.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// One cell of the calendar grid.
///
/// Derived per displayed month, never persisted. The today flag is
/// computed once at generation time by date-only equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// Day of month (1-31).
    pub day: u32,
    /// Full calendar date of this cell.
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month.
    pub in_month: bool,
    /// Whether the cell is today.
    pub is_today: bool,
}

impl CalendarDay {
    fn new(date: NaiveDate, month: u32, today: NaiveDate) -> Self {
        Self {
            day: date.day(),
            date,
            in_month: date.month() == month,
            is_today: date == today,
        }
    }
}

/// A month laid out as Monday-based weeks of seven cells.
///
/// Empty slots (`None`) only occur in the padded variant; the filled
/// variant populates every slot with a real day.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    /// Year of the displayed month.
    pub year: i32,
    /// Displayed month (1-12).
    pub month: u32,
    /// Weeks of the grid, each exactly seven cells.
    pub weeks: Vec<Vec<Option<CalendarDay>>>,
}

impl MonthGrid {
    /// Generate the grid for the month containing `reference`.
    ///
    /// With `fill` set, out-of-month slots hold adjacent-month days;
    /// otherwise they are left empty.
    #[must_use]
    pub fn generate(reference: NaiveDate, today: NaiveDate, fill: bool) -> Self {
        if fill {
            Self::filled(reference, today)
        } else {
            Self::padded(reference, today)
        }
    }

    /// Padded variant: leading and trailing slots are empty, the final
    /// week is right-padded, and no adjacent-month day ever appears.
    #[must_use]
    pub fn padded(reference: NaiveDate, today: NaiveDate) -> Self {
        let (year, month) = (reference.year(), reference.month());
        let first = first_of_month(reference);
        let lead = first.weekday().num_days_from_monday() as usize;

        let mut cells: Vec<Option<CalendarDay>> = vec![None; lead];
        for day in 0..days_in_month(year, month) {
            let date = first + Duration::days(i64::from(day));
            cells.push(Some(CalendarDay::new(date, month, today)));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Self {
            year,
            month,
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
        }
    }

    /// Filled variant: every slot holds a real day, with adjacent-month
    /// days marked `in_month = false`.
    #[must_use]
    pub fn filled(reference: NaiveDate, today: NaiveDate) -> Self {
        let (year, month) = (reference.year(), reference.month());
        let first = first_of_month(reference);
        let lead = first.weekday().num_days_from_monday() as usize;
        let total = (lead + days_in_month(year, month) as usize).div_ceil(7) * 7;

        let start = first - Duration::days(lead as i64);
        let cells: Vec<Option<CalendarDay>> = (0..total)
            .map(|i| Some(CalendarDay::new(start + Duration::days(i as i64), month, today)))
            .collect();

        Self {
            year,
            month,
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
        }
    }

    /// All cells that belong to the displayed month, in day order.
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks
            .iter()
            .flatten()
            .filter_map(Option::as_ref)
            .filter(|cell| cell.in_month)
    }
}

/// First day of the month containing `date`.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    // with_day(1) is valid for any month
    date.with_day(1).unwrap_or(date)
}

/// Number of days in a month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map_or(31, |d| d.day())
}

/// Shift a date by whole months, clamping the day to the target month.
///
/// Used for previous/next month navigation, so `2024-01-31` shifted by
/// one month lands on `2024-02-29`.
#[must_use]
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month() as i32 - 1 + delta;
    let year = months.div_euclid(12);
    let month = (months.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_padded_rows_are_seven_wide() {
        // Check every month of a leap year
        for month in 1..=12 {
            let grid = MonthGrid::padded(date(2024, month, 15), date(2024, 1, 1));
            for week in &grid.weeks {
                assert_eq!(week.len(), 7, "month {month}");
            }
        }
    }

    #[test]
    fn test_padded_cell_count_matches_days_in_month() {
        for month in 1..=12 {
            let grid = MonthGrid::padded(date(2024, month, 1), date(2024, 1, 1));
            assert_eq!(
                grid.month_days().count(),
                days_in_month(2024, month) as usize
            );
            // Padded variant never shows out-of-month days
            let real: usize = grid
                .weeks
                .iter()
                .flatten()
                .filter(|c| c.is_some())
                .count();
            assert_eq!(real, days_in_month(2024, month) as usize);
        }
    }

    #[test]
    fn test_padded_last_week_right_padded() {
        // June 2024 ends on a Sunday-started final week: 30th is a Sunday
        let grid = MonthGrid::padded(date(2024, 6, 1), date(2024, 1, 1));
        let last = grid.weeks.last().unwrap();
        assert_eq!(last.len(), 7);
        // September 2025 ends on a Tuesday; the last five slots are empty
        let grid = MonthGrid::padded(date(2025, 9, 1), date(2025, 1, 1));
        let last = grid.weeks.last().unwrap();
        assert!(last[1].is_some());
        assert!(last[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_first_day_lands_at_monday_based_column() {
        for month in 1..=12 {
            let first = date(2024, month, 1);
            let grid = MonthGrid::filled(first, date(2024, 1, 1));
            let expected = first.weekday().num_days_from_monday() as usize;
            let col = grid.weeks[0]
                .iter()
                .position(|c| c.as_ref().is_some_and(|d| d.in_month))
                .unwrap();
            assert_eq!(col, expected, "month {month}");
        }
    }

    #[test]
    fn test_filled_has_no_empty_slots() {
        let grid = MonthGrid::filled(date(2024, 9, 1), date(2024, 1, 1));
        assert!(grid.weeks.iter().flatten().all(Option::is_some));
        // September 2024 starts on a Sunday, so six August days lead
        let lead: Vec<u32> = grid.weeks[0]
            .iter()
            .filter_map(|c| c.as_ref())
            .take_while(|c| !c.in_month)
            .map(|c| c.day)
            .collect();
        assert_eq!(lead, vec![26, 27, 28, 29, 30, 31]);
    }

    #[test]
    fn test_today_flag_set_exactly_once() {
        let today = date(2024, 5, 17);
        let grid = MonthGrid::padded(date(2024, 5, 1), today);
        let count = grid
            .weeks
            .iter()
            .flatten()
            .filter_map(Option::as_ref)
            .filter(|c| c.is_today)
            .count();
        assert_eq!(count, 1);

        // Displaying a different month: no cell is today
        let grid = MonthGrid::padded(date(2024, 6, 1), today);
        assert!(grid.month_days().all(|c| !c.is_today));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 15));
    }
}
