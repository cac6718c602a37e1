//! Output formatting for wellb.
//!
//! This module provides formatters for displaying wellness data in
//! pretty (colored, human-readable) and JSON forms, plus the compact
//! number formatter used for step counts.

mod json;
mod pretty;

pub use json::*;
pub use pretty::*;

/// Render a number compactly for display.
///
/// Values of a million or more get an `M` suffix, a thousand or more a
/// `K` suffix, with one decimal place shown only when the scaled value
/// is non-integral. Smaller values render as plain decimal text. `None`
/// and NaN render as the empty string; the sign is preserved.
#[must_use]
pub fn format_compact(value: Option<f64>) -> String {
    let Some(v) = value else {
        return String::new();
    };
    if v.is_nan() {
        return String::new();
    }

    let abs = v.abs();
    if abs >= 1_000_000.0 {
        scaled(v / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        scaled(v / 1_000.0, "K")
    } else {
        plain(v)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scaled(v: f64, suffix: &str) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{suffix}", rounded as i64)
    } else {
        format!("{rounded:.1}{suffix}")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn plain(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
