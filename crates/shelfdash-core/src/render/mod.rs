//! Render sinks.
//!
//! A sink applies finished view models to some output. The client pipeline
//! only talks to this trait, so the same stages drive the HTML snapshot in
//! production and a recording sink in tests.

pub mod html;

use crate::error::Result;
use crate::view::{HeatmapChart, SummaryView, TimeSeriesChart};

pub use html::HtmlSnapshot;

pub trait DashboardSink {
    fn summary(&mut self, view: &SummaryView) -> Result<()>;
    fn time_series(&mut self, chart: &TimeSeriesChart) -> Result<()>;
    fn heatmap(&mut self, chart: &HeatmapChart) -> Result<()>;
}
