//! Loan-metrics documents, their view models, and the HTML they render to.
//!
//! Data flows one way: `model` decodes what the metrics API sends, `view`
//! turns it into display-ready values and chart descriptions, `render`
//! writes those out. No network or async runtime is involved, so every step
//! is testable from plain JSON.
//!
//! Metrics documents come from another service and may be partial. Decoding
//! never fails on a single bad field; it falls back to a placeholder. The
//! clippy denies below keep non-test code from panicking on such input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod render;
pub mod view;

/// Shared result type.
pub use error::{DashError, Result};
