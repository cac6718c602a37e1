//! wellb - a daily wellness tracker CLI
//!
//! This crate tracks per-day step counts and water intake against goals,
//! browsed through a monthly calendar and persisted as a single local
//! JSON document under `~/.wellb/`.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::WellbError;
pub use storage::WellnessStore;
