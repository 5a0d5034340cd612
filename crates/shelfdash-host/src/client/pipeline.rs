//! Ordered fetch-then-render stages.
//!
//! Stages run strictly one after another; each awaits its response before
//! the next request is sent. The first failure stops the pipeline. Panels
//! already handed to the sink stay rendered.

use std::fmt;

use shelfdash_core::error::Result;
use shelfdash_core::render::DashboardSink;
use shelfdash_core::view::{HeatmapChart, SummaryView, TimeSeriesChart};

use super::MetricsSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Summary,
    TimeSeries,
    Heatmap,
}

impl Stage {
    pub const ORDERED: [Stage; 3] = [Stage::Summary, Stage::TimeSeries, Stage::Heatmap];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Summary => "summary",
            Stage::TimeSeries => "time_series",
            Stage::Heatmap => "heatmap",
        }
    }

    pub async fn run<S, K>(self, source: &S, sink: &mut K) -> Result<()>
    where
        S: MetricsSource + ?Sized,
        K: DashboardSink + ?Sized,
    {
        match self {
            Stage::Summary => {
                let m = source.summary().await?;
                sink.summary(&SummaryView::from_metrics(&m))
            }
            Stage::TimeSeries => {
                let ts = source.time_series().await?;
                if let Some(err) = &ts.error {
                    tracing::warn!(stage = self.as_str(), error = %err, "metrics api reported an error");
                }
                sink.time_series(&TimeSeriesChart::from_series(&ts))
            }
            Stage::Heatmap => {
                let hm = source.heatmap().await?;
                if let Some(err) = &hm.error {
                    tracing::warn!(stage = self.as_str(), error = %err, "metrics api reported an error");
                }
                sink.heatmap(&HeatmapChart::from_heatmap(&hm))
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run every stage in order, stopping at the first error.
pub async fn run<S, K>(source: &S, sink: &mut K) -> Result<()>
where
    S: MetricsSource + ?Sized,
    K: DashboardSink + ?Sized,
{
    for stage in Stage::ORDERED {
        tracing::info!(%stage, "rendering");
        stage.run(source, sink).await?;
    }
    Ok(())
}

/// Top-level entry: [`run`], with any failure caught once and logged.
///
/// Returns whether every stage completed.
pub async fn init<S, K>(source: &S, sink: &mut K) -> bool
where
    S: MetricsSource + ?Sized,
    K: DashboardSink + ?Sized,
{
    match run(source, sink).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "dashboard render failed");
            false
        }
    }
}
