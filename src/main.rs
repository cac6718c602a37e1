use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use wellb::cli::args::{Cli, Commands};
use wellb::cli::commands;
use wellb::config::{Config, Paths};
use wellb::error::WellbError;
use wellb::storage::WellnessStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), WellbError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let paths = Paths::new()?;
    paths.ensure_dirs()?;

    let mut store = WellnessStore::load(paths.data_file);
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Calendar(args) => commands::calendar(&store, &config, &args, format)?,
        Commands::Log(args) => commands::log(&mut store, &config, &args, format)?,
        Commands::Show { date } => commands::show(&store, &config, date.as_deref(), format)?,
        Commands::Clear { date } => commands::clear(&mut store, date.as_deref(), format)?,
        Commands::Stats(args) => commands::stats(&store, &args, format)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
