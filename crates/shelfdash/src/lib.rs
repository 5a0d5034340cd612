//! shelfdash: one dependency for the whole dashboard.
//!
//! `shelfdash::core` holds the metrics model, view models and HTML
//! rendering; `shelfdash::host` holds configuration, the asset host and the
//! metrics API client.

pub use shelfdash_core as core;
pub use shelfdash_host as host;

pub use shelfdash_core::{DashError, Result};
