//! Chart descriptions for the time-series and heatmap panels.
//!
//! The structs serialize to the `data` / `layout` shapes of Plotly's
//! `newPlot`, so the renderer only has to embed them.

use serde::Serialize;

use crate::model::{Heatmap, TimeSeries};

pub const BOOKS_COLOR: &str = "#006d33";
pub const NOTEBOOKS_COLOR: &str = "#00994d";

/// Two-point gradient: light tint at 0, brand green at 1.
pub const HEATMAP_SCALE: [(f64, &str); 2] = [(0.0, "#e6f6ec"), (1.0, "#006d33")];

const BACKGROUND: &str = "#fff";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xgap: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ygap: Option<u8>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
}

impl Layout {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            xgap: None,
            ygap: None,
            paper_bgcolor: BACKGROUND,
            plot_bgcolor: BACKGROUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
}

/// A `lines+markers` scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub line: LineStyle,
}

impl LineTrace {
    fn new(name: &str, x: &[String], y: &[Option<f64>], color: &'static str) -> Self {
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
            name: name.to_string(),
            kind: "scatter",
            mode: "lines+markers",
            line: LineStyle { color },
        }
    }
}

/// Monthly loans, one line per item type, sharing the month axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesChart {
    pub data: Vec<LineTrace>,
    pub layout: Layout,
}

impl TimeSeriesChart {
    pub fn from_series(ts: &TimeSeries) -> Self {
        Self {
            data: vec![
                LineTrace::new("Books", &ts.months, &ts.books, BOOKS_COLOR),
                LineTrace::new("Notebooks", &ts.months, &ts.notebooks, NOTEBOOKS_COLOR),
            ],
            layout: Layout::titled("Monthly loans by item type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    pub z: Vec<Vec<Option<f64>>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub colorscale: [(f64, &'static str); 2],
    pub reversescale: bool,
}

/// Weekday x hour grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapChart {
    pub data: [HeatmapTrace; 1],
    pub layout: Layout,
}

impl HeatmapChart {
    pub fn from_heatmap(hm: &Heatmap) -> Self {
        let trace = HeatmapTrace {
            z: hm.values.clone(),
            x: hm.hours.iter().map(|h| hour_label(*h)).collect(),
            y: hm.weekdays.clone(),
            kind: "heatmap",
            colorscale: HEATMAP_SCALE,
            reversescale: false,
        };
        let mut layout = Layout::titled("Loans by weekday and hour");
        layout.xgap = Some(1);
        layout.ygap = Some(1);
        Self {
            data: [trace],
            layout,
        }
    }

    pub fn trace(&self) -> &HeatmapTrace {
        &self.data[0]
    }
}

/// `9` -> `"09:00"`, `14` -> `"14:00"`.
pub fn hour_label(hour: i64) -> String {
    if (0..10).contains(&hour) {
        format!("0{hour}:00")
    } else {
        format!("{hour}:00")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_labels_are_zero_padded() {
        assert_eq!(hour_label(0), "00:00");
        assert_eq!(hour_label(9), "09:00");
        assert_eq!(hour_label(10), "10:00");
        assert_eq!(hour_label(22), "22:00");
    }

    #[test]
    fn empty_series_still_has_two_traces() {
        let chart = TimeSeriesChart::from_series(&TimeSeries::default());
        assert_eq!(chart.data.len(), 2);
        assert!(chart.data.iter().all(|t| t.x.is_empty() && t.y.is_empty()));
    }
}
