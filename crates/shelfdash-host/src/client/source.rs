//! Where the metrics documents come from.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use shelfdash_core::error::{DashError, Result};
use shelfdash_core::model::{Heatmap, MetricsSummary, TimeSeries};

use super::ApiBase;

pub const METRICS_PATH: &str = "/metrics";
pub const TIME_SERIES_PATH: &str = "/time_series";
pub const HEATMAP_PATH: &str = "/heatmap";

#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn summary(&self) -> Result<MetricsSummary>;
    async fn time_series(&self) -> Result<TimeSeries>;
    async fn heatmap(&self) -> Result<Heatmap>;
}

/// GETs the three documents from the metrics API.
///
/// Status codes are not inspected: whatever body comes back is decoded, and
/// every failure is either `Transport` or `Decode`.
pub struct HttpMetricsSource {
    client: Client,
    base: ApiBase,
    page_origin: Url,
}

impl HttpMetricsSource {
    pub fn new(base: ApiBase, page_origin: &str) -> Result<Self> {
        let page_origin = Url::parse(page_origin)
            .map_err(|e| DashError::Config(format!("invalid page origin {page_origin:?}: {e}")))?;
        let client = Client::builder()
            .build()
            .map_err(|e| DashError::Transport(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            base,
            page_origin,
        })
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Absolute request URL; same-origin endpoints resolve against the page.
    pub fn url(&self, path: &str) -> Result<Url> {
        let endpoint = self.base.endpoint(path);
        let url = if self.base.is_same_origin() {
            self.page_origin.join(&endpoint)
        } else {
            Url::parse(&endpoint)
        };
        url.map_err(|e| DashError::Config(format!("invalid api url {endpoint:?}: {e}")))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DashError::Transport(format!("GET {url}: {e}")))?;
        tracing::debug!(%url, status = %res.status(), "metrics api response");
        res.json::<T>()
            .await
            .map_err(|e| DashError::Decode(format!("GET {url}: {e}")))
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn summary(&self) -> Result<MetricsSummary> {
        self.fetch_json(METRICS_PATH).await
    }

    async fn time_series(&self) -> Result<TimeSeries> {
        self.fetch_json(TIME_SERIES_PATH).await
    }

    async fn heatmap(&self) -> Result<Heatmap> {
        self.fetch_json(HEATMAP_PATH).await
    }
}
