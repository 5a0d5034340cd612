//! Shared application state for the asset host.
//!
//! Holds the metrics source the dashboard page is rendered from. Nothing
//! fetched through it is kept: every page load asks the source again.

use std::sync::Arc;

use shelfdash_core::error::Result;

use crate::client::{ApiBase, HttpMetricsSource, MetricsSource};
use crate::config::ClientSection;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn MetricsSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        Self { source }
    }

    /// State backed by the HTTP metrics API described in `client`.
    pub fn from_client_config(client: &ClientSection) -> Result<Self> {
        let base = ApiBase::resolve(client.api_base.as_deref(), &client.page_origin);
        let source = HttpMetricsSource::new(base, &client.page_origin)?;
        tracing::info!(api = %source.base().endpoint(""), "metrics api");
        Ok(Self::new(Arc::new(source)))
    }

    pub fn source(&self) -> Arc<dyn MetricsSource> {
        Arc::clone(&self.source)
    }
}
