//! `/api/time_series` document.

use serde::Deserialize;

use super::lenient::lenient;

/// Monthly loan counts per item type.
///
/// `months`, `books` and `notebooks` are positionally aligned. A `null`
/// point stays `None` and shows as a gap in the line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSeries {
    #[serde(default, deserialize_with = "lenient")]
    pub months: Vec<String>,
    #[serde(rename = "livros", default, deserialize_with = "lenient")]
    pub books: Vec<Option<f64>>,
    #[serde(rename = "notebook", default, deserialize_with = "lenient")]
    pub notebooks: Vec<Option<f64>>,
    /// Set by the API instead of data when its source is missing columns.
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}
