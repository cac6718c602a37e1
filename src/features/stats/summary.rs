//! Summary calculations over recorded days.

use serde::{Deserialize, Serialize};

use crate::core::WellnessRecord;
use crate::storage::WellnessStore;

/// Aggregate statistics over a set of recorded days.
///
/// Percentages are rounded to the nearest integer; an empty set yields
/// all-zero fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of days with an entry.
    pub entries: usize,
    /// Total steps across all entries.
    pub total_steps: u64,
    /// Average steps per entered day.
    pub avg_steps: f64,
    /// Total water across all entries, in liters.
    pub total_water: f64,
    /// Average water per entered day, in liters.
    pub avg_water: f64,
    /// Percentage of entered days meeting the step goal.
    pub pct_steps_goal: u32,
    /// Percentage of entered days meeting the water goal.
    pub pct_water_goal: u32,
}

impl Summary {
    /// Calculate a summary over an iterator of records.
    pub fn calculate<'a>(records: impl Iterator<Item = &'a WellnessRecord>) -> Self {
        let mut entries = 0_usize;
        let mut total_steps = 0_u64;
        let mut total_water = 0.0_f64;
        let mut steps_met = 0_usize;
        let mut water_met = 0_usize;

        for record in records {
            entries += 1;
            total_steps += record.steps;
            total_water += record.water;
            if record.met_steps_goal() {
                steps_met += 1;
            }
            if record.met_water_goal() {
                water_met += 1;
            }
        }

        if entries == 0 {
            return Self::empty();
        }

        Self {
            entries,
            total_steps,
            avg_steps: total_steps as f64 / entries as f64,
            total_water,
            avg_water: total_water / entries as f64,
            pct_steps_goal: percentage(steps_met, entries),
            pct_water_goal: percentage(water_met, entries),
        }
    }

    /// Summary over every stored day.
    #[must_use]
    pub fn all_time(store: &WellnessStore) -> Self {
        Self::calculate(store.iter().map(|(_, r)| r))
    }

    /// Summary over one calendar month.
    #[must_use]
    pub fn for_month(store: &WellnessStore, year: i32, month: u32) -> Self {
        Self::calculate(store.month(year, month).map(|(_, r)| r))
    }

    /// The all-zero summary for an empty record set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: 0,
            total_steps: 0,
            avg_steps: 0.0,
            total_water: 0.0,
            avg_water: 0.0,
            pct_steps_goal: 0,
            pct_water_goal: 0,
        }
    }
}

/// Nearest-integer percentage of `met` out of `total`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(met: usize, total: usize) -> u32 {
    (met as f64 / total as f64 * 100.0).round() as u32
}
