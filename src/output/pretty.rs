use chrono::NaiveDate;
use colored::Colorize;

use super::format_compact;
use crate::core::{date_key, MonthGrid, WellnessRecord};
use crate::features::stats::Summary;
use crate::storage::WellnessStore;

/// Format a month grid as a colored calendar.
///
/// Days with an entry are yellow, days meeting both goals green, today
/// highlighted, out-of-month days dimmed.
pub fn format_calendar_pretty(grid: &MonthGrid, store: &WellnessStore) -> String {
    let title = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map_or_else(String::new, |d| d.format("%B %Y").to_string());

    let mut output = format!("{:^28}\n", title.bold());
    output.push_str(&"Mo Tu We Th Fr Sa Su".dimmed().to_string());
    output.push('\n');

    for week in &grid.weeks {
        let mut line = String::new();
        for cell in week {
            let text = match cell {
                None => "  ".to_string(),
                Some(day) => {
                    let number = format!("{:>2}", day.day);
                    if !day.in_month {
                        number.dimmed().to_string()
                    } else {
                        let styled = match store.get(&date_key(day.date)) {
                            Some(r) if r.met_steps_goal() && r.met_water_goal() => number.green(),
                            Some(_) => number.yellow(),
                            None => number.normal(),
                        };
                        if day.is_today {
                            styled.reversed().to_string()
                        } else {
                            styled.to_string()
                        }
                    }
                },
            };
            line.push_str(&text);
            line.push(' ');
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!(
        "{} entry  {} both goals met  {} today\n",
        "##".yellow(),
        "##".green(),
        "##".reversed()
    ));

    output
}

/// Format one day's data for display.
pub fn format_day_pretty(date: NaiveDate, record: &WellnessRecord, has_entry: bool) -> String {
    let mut output = format!("{}\n", date.format("%A, %B %d, %Y").to_string().bold());
    output.push_str(&"─".repeat(32));
    output.push('\n');

    if !has_entry {
        output.push_str(&format!("  {}\n", "No entry (showing defaults)".dimmed()));
    }

    output.push_str(&format!(
        "  {}: {} / {}  {}\n",
        "Steps".dimmed(),
        format_compact(Some(record.steps as f64)),
        format_compact(Some(record.steps_goal as f64)),
        goal_marker(record.met_steps_goal())
    ));
    output.push_str(&format!(
        "  {}: {}L / {}L  {}\n",
        "Water".dimmed(),
        record.water,
        record.water_goal,
        goal_marker(record.met_water_goal())
    ));

    output
}

/// Format a summary for display.
pub fn format_summary_pretty(title: &str, summary: &Summary) -> String {
    let mut output = format!("{}\n", title.bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if summary.entries == 0 {
        output.push_str("  No entries\n");
        return output;
    }

    output.push_str(&format!("  Days entered: {}\n", summary.entries));
    output.push_str(&format!(
        "  Steps: {} total, {} avg/day, goal met {}\n",
        format_compact(Some(summary.total_steps as f64)),
        format_compact(Some(summary.avg_steps.round())),
        pct(summary.pct_steps_goal)
    ));
    output.push_str(&format!(
        "  Water: {:.1}L total, {:.1}L avg/day, goal met {}\n",
        summary.total_water,
        summary.avg_water,
        pct(summary.pct_water_goal)
    ));

    output
}

fn goal_marker(met: bool) -> String {
    if met {
        "[x]".green().to_string()
    } else {
        "[ ]".white().to_string()
    }
}

fn pct(value: u32) -> String {
    let text = format!("{value}%");
    if value >= 100 {
        text.green().to_string()
    } else if value >= 50 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_has_week_header_and_title() {
        let dir = TempDir::new().unwrap();
        let store = WellnessStore::load(dir.path().join("wellness-tracker-v1.json"));
        let grid = MonthGrid::padded(date(2024, 5, 1), date(2024, 5, 17));

        let output = format_calendar_pretty(&grid, &store);
        assert!(output.contains("May 2024"));
        assert!(output.contains("Mo Tu We Th Fr Sa Su"));
    }

    #[test]
    fn test_day_without_entry_shows_defaults_note() {
        let output = format_day_pretty(date(2024, 5, 1), &WellnessRecord::default(), false);
        assert!(output.contains("No entry"));
        assert!(output.contains("10K"));
    }

    #[test]
    fn test_empty_summary_renders_no_entries() {
        let output = format_summary_pretty("All time", &Summary::empty());
        assert!(output.contains("No entries"));
    }

    #[test]
    fn test_summary_lines() {
        let records = [WellnessRecord {
            steps: 12_000,
            steps_goal: 10_000,
            water: 2.0,
            water_goal: 2.0,
        }];
        let summary = Summary::calculate(records.iter());
        let output = format_summary_pretty("May 2024", &summary);
        assert!(output.contains("Days entered: 1"));
        assert!(output.contains("12K"));
    }
}
