use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "wellb")]
#[command(about = "A daily wellness tracker - steps and water against goals")]
#[command(long_about = "wellb - a daily wellness tracker

Record your daily step count and water intake against goals, browse a
monthly calendar of entries, and review summary statistics. All data is
stored locally in ~/.wellb/ as a single JSON file.

QUICK START:
  wellb log --steps 8500 --water 1.5     Record today's numbers
  wellb calendar                         Show this month's calendar
  wellb stats                            This month's summary

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  wellb <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a month as a calendar grid
    ///
    /// Renders the month in Monday-based weeks. Days with an entry are
    /// highlighted, and days meeting both goals are marked. By default
    /// slots outside the month are blank; use --fill to show the real
    /// adjacent-month days instead.
    ///
    /// # Examples
    ///
    ///   wellb calendar                 This month
    ///   wellb cal --month 2024-05      A specific month
    ///   wellb cal --prev               Last month
    ///   wellb cal --fill               Fill in adjacent-month days
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// Record steps and water for a day
    ///
    /// Opens the day (today unless a date is given), seeds the entry
    /// from any existing record or from your default goals, applies the
    /// given values, and saves. Non-numeric values fall back to zero
    /// for actuals and to the default goals for goals.
    ///
    /// # Examples
    ///
    ///   wellb log --steps 8500 --water 1.5
    ///   wellb log 2024-05-01 --steps 12000
    ///   wellb log --water 2.2 --water-goal 2.5
    #[command(alias = "l")]
    Log(LogArgs),

    /// Show one day's entry
    ///
    /// Displays the stored record for a day, or the seeded defaults if
    /// the day has no entry yet.
    ///
    /// # Examples
    ///
    ///   wellb show               Today's entry
    ///   wellb show 2024-05-01    A specific day
    #[command(alias = "s")]
    Show {
        /// Day to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },

    /// Remove a day's entry
    ///
    /// Deletes the stored record for the day. Clearing a day with no
    /// entry is a no-op.
    ///
    /// # Examples
    ///
    ///   wellb clear              Clear today's entry
    ///   wellb clear 2024-05-01   Clear a specific day
    Clear {
        /// Day to clear (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },

    /// Show summary statistics
    ///
    /// Totals, averages, and goal-met percentages over the current
    /// month by default, a given month with --month, or every stored
    /// day with --all.
    ///
    /// # Examples
    ///
    ///   wellb stats                    This month
    ///   wellb stats --month 2024-04    A specific month
    ///   wellb stats --all              All-time
    Stats(StatsArgs),
}

/// Arguments for the calendar command.
#[derive(Args)]
pub struct CalendarArgs {
    /// Month to display (YYYY-MM, defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Go back this many months from the reference month
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "1")]
    pub prev: Option<u32>,

    /// Go forward this many months from the reference month
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "1")]
    pub next: Option<u32>,

    /// Show real adjacent-month days in out-of-month slots
    #[arg(long)]
    pub fill: bool,
}

/// Arguments for the log command.
#[derive(Args)]
pub struct LogArgs {
    /// Day to record (YYYY-MM-DD, defaults to today)
    pub date: Option<String>,

    /// Steps walked
    #[arg(long)]
    pub steps: Option<String>,

    /// Water drunk, in liters
    #[arg(long)]
    pub water: Option<String>,

    /// Step goal for the day
    #[arg(long)]
    pub steps_goal: Option<String>,

    /// Water goal for the day, in liters
    #[arg(long)]
    pub water_goal: Option<String>,
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    /// Month to summarize (YYYY-MM, defaults to the current month)
    #[arg(long, conflicts_with = "all")]
    pub month: Option<String>,

    /// Summarize every stored day
    #[arg(long)]
    pub all: bool,
}
