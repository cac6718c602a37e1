//! Daily wellness records and their date keys.
//!
//! One record per calendar day, keyed by a canonical `YYYY-MM-DD` string.
//! Serialized field names follow the on-disk JSON schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default daily step goal.
pub const DEFAULT_STEPS_GOAL: u64 = 10_000;

/// Default daily water goal, in liters.
pub const DEFAULT_WATER_GOAL: f64 = 2.0;

/// One day's recorded wellness data.
///
/// Absent goal fields deserialize to the global defaults, so every record
/// in memory carries a usable goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessRecord {
    /// Steps walked that day.
    #[serde(default)]
    pub steps: u64,
    /// Step goal for that day.
    #[serde(rename = "stepsGoal", default = "default_steps_goal")]
    pub steps_goal: u64,
    /// Water drunk that day, in liters.
    #[serde(default)]
    pub water: f64,
    /// Water goal for that day, in liters.
    #[serde(rename = "waterGoal", default = "default_water_goal")]
    pub water_goal: f64,
}

const fn default_steps_goal() -> u64 {
    DEFAULT_STEPS_GOAL
}

const fn default_water_goal() -> f64 {
    DEFAULT_WATER_GOAL
}

impl Default for WellnessRecord {
    fn default() -> Self {
        Self {
            steps: 0,
            steps_goal: DEFAULT_STEPS_GOAL,
            water: 0.0,
            water_goal: DEFAULT_WATER_GOAL,
        }
    }
}

impl WellnessRecord {
    /// Whether the recorded steps meet the day's step goal.
    #[must_use]
    pub const fn met_steps_goal(&self) -> bool {
        self.steps >= self.steps_goal
    }

    /// Whether the recorded water meets the day's water goal.
    #[must_use]
    pub fn met_water_goal(&self) -> bool {
        self.water >= self.water_goal
    }
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
///
/// Keys sort chronologically as plain strings.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date key back into a date.
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_key(date), "2024-03-07");
        assert_eq!(parse_date_key("2024-03-07"), Some(date));
    }

    #[test]
    fn test_date_keys_sort_chronologically() {
        let mut keys = vec!["2024-12-01", "2024-02-15", "2023-06-30"];
        keys.sort_unstable();
        assert_eq!(keys, vec!["2023-06-30", "2024-02-15", "2024-12-01"]);
    }

    #[test]
    fn test_parse_date_key_invalid() {
        assert_eq!(parse_date_key("not-a-date"), None);
        assert_eq!(parse_date_key("2024-13-01"), None);
    }

    #[test]
    fn test_default_record() {
        let record = WellnessRecord::default();
        assert_eq!(record.steps, 0);
        assert_eq!(record.steps_goal, 10_000);
        assert!((record.water_goal - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_goals_deserialize_to_defaults() {
        let record: WellnessRecord =
            serde_json::from_str(r#"{"steps": 8000, "water": 1.5}"#).unwrap();
        assert_eq!(record.steps, 8000);
        assert_eq!(record.steps_goal, DEFAULT_STEPS_GOAL);
        assert!((record.water_goal - DEFAULT_WATER_GOAL).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialized_field_names() {
        let record = WellnessRecord {
            steps: 12_000,
            steps_goal: 10_000,
            water: 2.5,
            water_goal: 2.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"stepsGoal\""));
        assert!(json.contains("\"waterGoal\""));
    }

    #[test]
    fn test_goal_met() {
        let record = WellnessRecord {
            steps: 10_000,
            steps_goal: 10_000,
            water: 1.9,
            water_goal: 2.0,
        };
        assert!(record.met_steps_goal());
        assert!(!record.met_water_goal());
    }
}
