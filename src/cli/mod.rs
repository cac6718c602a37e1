//! Command-line interface for wellb.

pub mod args;
pub mod commands;
