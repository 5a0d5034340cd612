//! HTML rendering of the dashboard.
//!
//! Each panel is rendered to a fragment as its stage completes; `finish`
//! stitches whatever was rendered into one page. A panel whose stage never
//! ran is simply absent.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;

use crate::error::{DashError, Result};
use crate::view::summary::BREAKDOWN_COLUMNS;
use crate::view::{
    BreakdownBody, BreakdownView, HeatmapChart, SummaryView, TimeSeriesChart, PLACEHOLDER,
};

use super::DashboardSink;

pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const TIME_SERIES_ID: &str = "tsChart";
pub const HEATMAP_ID: &str = "heatmapChart";

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;color:#1b1b1b}\
.cards{display:flex;flex-wrap:wrap;gap:1rem}\
.card{border:1px solid #cfe8d8;border-radius:6px;padding:.75rem 1rem}\
.card .val{font-size:1.4rem;color:#006d33}\
table{border-collapse:collapse;margin-bottom:1rem}\
th,td{padding:.25rem .6rem;border-bottom:1px solid #e6f6ec;text-align:left}\
.pct-bar{display:inline-block;width:80px;height:8px;background:#e6f6ec}\
.pct-fill{height:8px;background:#006d33}";

/// Render sink that collects one HTML fragment per panel.
#[derive(Debug, Default)]
pub struct HtmlSnapshot {
    summary: Option<Markup>,
    time_series: Option<Markup>,
    heatmap: Option<Markup>,
}

impl HtmlSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary_html(&self) -> Option<&str> {
        self.summary.as_ref().map(|m| m.0.as_str())
    }

    pub fn time_series_html(&self) -> Option<&str> {
        self.time_series.as_ref().map(|m| m.0.as_str())
    }

    pub fn heatmap_html(&self) -> Option<&str> {
        self.heatmap.as_ref().map(|m| m.0.as_str())
    }

    /// Complete page with every panel rendered so far.
    pub fn page(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { "Library loans dashboard" }
                    link rel="icon" href="/favicon.ico";
                    style { (STYLE) }
                    script src=(PLOTLY_SRC) {}
                }
                body {
                    h1 { "Library loans" }
                    @if let Some(m) = &self.summary { (m) }
                    @if let Some(m) = &self.time_series { (m) }
                    @if let Some(m) = &self.heatmap { (m) }
                }
            }
        }
    }

    pub fn finish(&self) -> String {
        self.page().into_string()
    }
}

impl DashboardSink for HtmlSnapshot {
    fn summary(&mut self, view: &SummaryView) -> Result<()> {
        self.summary = Some(summary_fragment(view));
        Ok(())
    }

    fn time_series(&mut self, chart: &TimeSeriesChart) -> Result<()> {
        self.time_series = Some(chart_fragment(TIME_SERIES_ID, &chart.data, &chart.layout)?);
        Ok(())
    }

    fn heatmap(&mut self, chart: &HeatmapChart) -> Result<()> {
        self.heatmap = Some(chart_fragment(HEATMAP_ID, &chart.data, &chart.layout)?);
        Ok(())
    }
}

pub fn summary_fragment(v: &SummaryView) -> Markup {
    let cards = [
        ("avgLoanVal", "Average loan (days)", &v.avg_loan_days),
        ("totalRecordsVal", "Total records", &v.total_records),
        ("uniqueBorrowersVal", "Unique borrowers", &v.unique_borrowers),
        ("currentlyLoanedVal", "Currently on loan", &v.currently_loaned),
        ("topPersonVal", "Top borrower", &v.top_person),
        ("avgDelayVal", "Average delay (days)", &v.avg_delay),
    ];
    html! {
        section id="summary" {
            div class="cards" {
                @for (id, title, value) in cards {
                    div class="card" {
                        div { (title) }
                        div class="val" id=(id) { (value) }
                    }
                }
            }
            (ranking_list("topPeopleList", "Top borrowers", &v.top_people))
            (ranking_list("topBooksList", "Most borrowed titles", &v.top_books))
            div id="delayByGenre" { (breakdown_fragment(&v.delay_by_genre)) }
            div id="delayByAge" { (breakdown_fragment(&v.delay_by_age)) }
        }
    }
}

fn ranking_list(id: &str, title: &str, lines: &[String]) -> Markup {
    html! {
        h3 { (title) }
        ol id=(id) {
            @for line in lines {
                li { (line) }
            }
        }
    }
}

pub fn breakdown_fragment(b: &BreakdownView) -> Markup {
    html! {
        h4 { (b.heading) }
        @match &b.body {
            BreakdownBody::Empty => {
                p { (PLACEHOLDER) }
            }
            BreakdownBody::Table(rows) => {
                table {
                    thead {
                        tr {
                            @for col in BREAKDOWN_COLUMNS {
                                th { (col) }
                            }
                        }
                    }
                    tbody {
                        @for r in rows {
                            tr {
                                td { (r.label) }
                                td { (r.total) }
                                td { (r.delayed) }
                                td {
                                    div class="pct-bar" {
                                        div class="pct-fill" style=(format!("width:{}%", r.pct)) {}
                                    }
                                    small { " " (r.pct) "%" }
                                }
                                td { (r.avg_delay) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Container plus the `Plotly.newPlot` call that fills it.
pub fn chart_fragment<D: Serialize, L: Serialize>(id: &str, data: &D, layout: &L) -> Result<Markup> {
    let data = script_json(data)?;
    let layout = script_json(layout)?;
    let call = format!("Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});");
    Ok(html! {
        div id=(id) {}
        script { (PreEscaped(call)) }
    })
}

/// JSON that is safe to inline inside a `<script>` element.
fn script_json<T: Serialize>(v: &T) -> Result<String> {
    let s = serde_json::to_string(v).map_err(|e| DashError::Render(format!("chart json: {e}")))?;
    Ok(s.replace("</", "<\\/"))
}
