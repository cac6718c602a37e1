//! Summary statistics module.
//!
//! Computes totals, averages, and goal-met percentages over recorded
//! days, for one calendar month or all-time.

mod summary;

pub use summary::Summary;
