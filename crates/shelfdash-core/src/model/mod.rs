//! Metrics API documents.
//!
//! Three read-only snapshots, fetched fresh per render:
//! - `MetricsSummary` from `/api/metrics`
//! - `TimeSeries` from `/api/time_series`
//! - `Heatmap` from `/api/heatmap`
//!
//! Every field is optional on the wire and decoded leniently (see
//! [`lenient`]), so a partial document still renders.

mod lenient;
pub mod heatmap;
pub mod series;
pub mod summary;

pub use heatmap::Heatmap;
pub use series::TimeSeries;
pub use summary::{DelayRow, MetricsSummary, RankedEntry};
