//! Day entry commands: log, show, clear.
//!
//! All three drive the editor session: select a day, apply edits, then
//! save, clear, or close.

use super::parse_date_arg;
use crate::cli::args::{LogArgs, OutputFormat};
use crate::config::Config;
use crate::core::{date_key, EditBuffer, EditorSession, WellnessRecord};
use crate::error::WellbError;
use crate::output::{format_day_json, format_day_pretty};
use crate::storage::WellnessStore;

/// Record steps and water for a day, then save.
pub fn log(
    store: &mut WellnessStore,
    config: &Config,
    args: &LogArgs,
    format: OutputFormat,
) -> Result<String, WellbError> {
    let date = parse_date_arg(args.date.as_deref())?;

    let mut session = EditorSession::new();
    session.select_with_defaults(date, store, &seed_record(config));

    if let Some(buffer) = session.buffer_mut() {
        if let Some(steps) = &args.steps {
            buffer.steps = steps.clone();
        }
        if let Some(water) = &args.water {
            buffer.water = water.clone();
        }
        if let Some(steps_goal) = &args.steps_goal {
            buffer.steps_goal = steps_goal.clone();
        }
        if let Some(water_goal) = &args.water_goal {
            buffer.water_goal = water_goal.clone();
        }
    }

    let record = session
        .save(store)
        .ok_or_else(|| WellbError::Storage("No day selected".to_string()))?;

    match format {
        OutputFormat::Json => format_day_json(date, &record, true),
        OutputFormat::Pretty => Ok(format_day_pretty(date, &record, true)),
    }
}

/// Show a day's entry, or the seeded defaults when the day is empty.
pub fn show(
    store: &WellnessStore,
    config: &Config,
    date_arg: Option<&str>,
    format: OutputFormat,
) -> Result<String, WellbError> {
    let date = parse_date_arg(date_arg)?;
    let has_entry = store.contains(&date_key(date));

    let mut session = EditorSession::new();
    session.select_with_defaults(date, store, &seed_record(config));
    let record = session.buffer().map(EditBuffer::to_record).unwrap_or_default();
    session.close();

    match format {
        OutputFormat::Json => format_day_json(date, &record, has_entry),
        OutputFormat::Pretty => Ok(format_day_pretty(date, &record, has_entry)),
    }
}

/// Remove a day's entry.
pub fn clear(
    store: &mut WellnessStore,
    date_arg: Option<&str>,
    format: OutputFormat,
) -> Result<String, WellbError> {
    let date = parse_date_arg(date_arg)?;

    let mut session = EditorSession::new();
    session.select(date, store);
    let removed = session.clear(store);

    match format {
        OutputFormat::Json => Ok(serde_json::json!({
            "date": date_key(date),
            "removed": removed,
        })
        .to_string()),
        OutputFormat::Pretty => Ok(if removed {
            format!("Cleared entry for {}", date_key(date))
        } else {
            format!("No entry for {}", date_key(date))
        }),
    }
}

/// The record an empty day is seeded from: zero actuals, configured goals.
fn seed_record(config: &Config) -> WellnessRecord {
    WellnessRecord {
        steps: 0,
        steps_goal: config.goals.steps,
        water: 0.0,
        water_goal: config.goals.water,
    }
}
