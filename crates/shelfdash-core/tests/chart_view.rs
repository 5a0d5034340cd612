//! Time-series and heatmap view-model tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shelfdash_core::model::{Heatmap, TimeSeries};
use shelfdash_core::view::charts::{BOOKS_COLOR, NOTEBOOKS_COLOR};
use shelfdash_core::view::{HeatmapChart, TimeSeriesChart};

use vector_loader as vectors;

#[test]
fn two_series_share_the_month_axis() {
    let ts: TimeSeries = vectors::load("time_series.json");
    let chart = TimeSeriesChart::from_series(&ts);

    assert_eq!(chart.data.len(), 2);
    let (books, notebooks) = (&chart.data[0], &chart.data[1]);
    assert_eq!(books.x, vec!["Jan", "Feb"]);
    assert_eq!(notebooks.x, vec!["Jan", "Feb"]);
    assert_eq!(books.y, vec![Some(10.0), Some(20.0)]);
    assert_eq!(notebooks.y, vec![Some(1.0), Some(2.0)]);
    assert_eq!(books.line.color, BOOKS_COLOR);
    assert_eq!(notebooks.line.color, NOTEBOOKS_COLOR);
    assert_ne!(books.line.color, notebooks.line.color);
}

#[test]
fn error_document_yields_an_empty_chart() {
    let ts: TimeSeries = vectors::load("time_series_error.json");
    assert_eq!(ts.error.as_deref(), Some("colunas faltando"));
    let chart = TimeSeriesChart::from_series(&ts);
    assert!(chart.data.iter().all(|t| t.x.is_empty() && t.y.is_empty()));
}

#[test]
fn time_series_serializes_as_plotly_traces() {
    let ts: TimeSeries = vectors::load("time_series.json");
    let json = serde_json::to_value(TimeSeriesChart::from_series(&ts)).unwrap();
    let first = &json["data"][0];
    assert_eq!(first["type"], "scatter");
    assert_eq!(first["mode"], "lines+markers");
    assert_eq!(first["line"]["color"], BOOKS_COLOR);
    assert_eq!(json["layout"]["paper_bgcolor"], "#fff");
    assert!(json["layout"].get("xgap").is_none());
}

#[test]
fn heatmap_hour_labels_and_grid() {
    let hm: Heatmap = vectors::load("heatmap.json");
    let chart = HeatmapChart::from_heatmap(&hm);
    let t = chart.trace();
    assert_eq!(t.x, vec!["09:00", "14:00"]);
    assert_eq!(t.y, vec!["Segunda", "Terça"]);
    assert_eq!(t.z, vec![vec![Some(1.0), Some(0.0)], vec![Some(3.0), Some(7.0)]]);
}

#[test]
fn heatmap_serializes_color_scale() {
    let hm: Heatmap = vectors::load("heatmap.json");
    let json = serde_json::to_value(HeatmapChart::from_heatmap(&hm)).unwrap();
    let trace = &json["data"][0];
    assert_eq!(trace["type"], "heatmap");
    assert_eq!(trace["colorscale"], serde_json::json!([[0.0, "#e6f6ec"], [1.0, "#006d33"]]));
    assert_eq!(trace["reversescale"], false);
    assert_eq!(json["layout"]["xgap"], 1);
}

#[test]
fn null_points_and_cells_are_gaps() {
    let ts: TimeSeries = vectors::load("gaps.json");
    let chart = TimeSeriesChart::from_series(&ts);
    assert_eq!(chart.data[0].y, vec![Some(10.0), None, Some(30.0)]);
    assert_eq!(chart.data[1].y.len(), 3);

    let hm: Heatmap = vectors::load("gaps.json");
    let chart = HeatmapChart::from_heatmap(&hm);
    assert_eq!(chart.trace().z, vec![vec![None, Some(4.0)]]);

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["data"][0]["z"], serde_json::json!([[null, 4.0]]));
}
