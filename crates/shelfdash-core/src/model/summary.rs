//! `/api/metrics` document.

use serde::Deserialize;

use super::lenient::lenient;

/// Aggregate loan statistics, computed upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub average_loan_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_records: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub unique_borrowers: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currently_loaned: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub top_person: Option<RankedEntry>,
    /// Ranked borrowers. Order is authoritative.
    #[serde(default, deserialize_with = "lenient")]
    pub top_people: Vec<RankedEntry>,
    /// Ranked titles. Order is authoritative.
    #[serde(default, deserialize_with = "lenient")]
    pub top_books: Vec<RankedEntry>,
    #[serde(default, deserialize_with = "lenient")]
    pub delay_by_genre: Vec<DelayRow>,
    #[serde(default, deserialize_with = "lenient")]
    pub delay_by_age: Vec<DelayRow>,
}

/// One line of a ranking: a borrower (`person`) or a title (`title`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RankedEntry {
    #[serde(rename = "person", alias = "title", default, deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u64>,
}

/// One category of a delay breakdown.
///
/// Genre rows carry `Gênero`, age rows carry `age_group`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DelayRow {
    #[serde(rename = "Gênero", default, deserialize_with = "lenient")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub age_group: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub delayed: Option<u64>,
    /// Fraction in `0..=1`.
    #[serde(default, deserialize_with = "lenient")]
    pub pct_delayed: Option<f64>,
    /// Days; `None` when the category has no completed returns.
    #[serde(default, deserialize_with = "lenient")]
    pub avg_delay: Option<f64>,
}
