//! Configuration management for wellb.
//!
//! This module handles loading and saving configuration from `~/.wellb/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{CalendarConfig, Config, GeneralConfig, GoalsConfig};
