//! View models: pure mappings from API documents to render descriptions.
//!
//! Nothing here touches I/O. A renderer (see `crate::render`) consumes these
//! values; tests assert on them directly.

pub mod charts;
pub mod summary;

use std::fmt::Display;

pub use charts::{HeatmapChart, TimeSeriesChart};
pub use summary::{BreakdownBody, BreakdownView, DelayRowView, SummaryView};

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "-";

/// `Display` the value, or the placeholder when absent.
pub fn or_placeholder<T: Display>(v: Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Two-decimal rendering, or the placeholder when absent.
pub fn fixed2(v: Option<f64>) -> String {
    match v {
        Some(v) => to_fixed2(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Two decimals; a value exactly halfway between hundredths rounds away
/// from zero. `{:.2}` alone would round such ties to even.
///
/// An exact tie is `k / 200` with `k` odd, and it is only representable
/// when `k` is a multiple of 25 (`1.625`, `0.125`). Anything else, including
/// `1.005` which is stored just below the tie, is left to `{:.2}`, which
/// rounds the exact binary value correctly.
pub fn to_fixed2(v: f64) -> String {
    let mag = v.abs();
    let twice = (mag * 200.0).round();
    let tie = twice % 2.0 == 1.0 && twice % 25.0 == 0.0 && twice / 200.0 == mag;
    if !tie {
        return format!("{v:.2}");
    }
    let hundredths = (twice + 1.0) / 2.0;
    let sign = if v.is_sign_negative() { "-" } else { "" };
    format!(
        "{sign}{}.{:02}",
        (hundredths / 100.0).floor() as u64,
        (hundredths % 100.0) as u64
    )
}
