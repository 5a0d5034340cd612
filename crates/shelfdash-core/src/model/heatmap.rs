//! `/api/heatmap` document.

use serde::Deserialize;

use super::lenient::lenient;

/// Loan counts by weekday (rows) and hour of day (columns).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Heatmap {
    #[serde(default, deserialize_with = "lenient")]
    pub weekdays: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hours: Vec<i64>,
    /// `values[weekday][hour]`; a `null` cell stays `None`.
    #[serde(default, deserialize_with = "lenient")]
    pub values: Vec<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}
