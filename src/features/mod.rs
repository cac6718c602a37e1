//! Feature implementations for wellb.
//!
//! This module contains the implementation of features built on the core
//! model:
//! - Summary statistics

pub mod stats;
