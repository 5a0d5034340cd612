//! Dashboard client.
//!
//! An ordered pipeline of three fetch-then-render stages against the metrics
//! API. Configuration is passed in explicitly; nothing is looked up globally.

pub mod api_base;
pub mod pipeline;
pub mod source;

pub use api_base::ApiBase;
pub use pipeline::{init, run, Stage};
pub use source::{HttpMetricsSource, MetricsSource};
