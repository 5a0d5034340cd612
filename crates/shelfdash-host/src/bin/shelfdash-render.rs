//! shelfdash one-off export.
//!
//! Fetches the summary, time series, and heatmap documents once and writes
//! the rendered page to `client.output`. The host renders the same page
//! fresh on every request; this is for archiving or offline viewing. A
//! failed stage is logged; whatever rendered before it is still written.

use std::fs;

use shelfdash_core::error::{DashError, Result};
use shelfdash_core::render::HtmlSnapshot;
use shelfdash_host::app_state::AppState;
use shelfdash_host::{client, config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = config::load_from_env()?;
    let state = AppState::from_client_config(&cfg.client)?;

    let mut sink = HtmlSnapshot::new();
    client::init(state.source().as_ref(), &mut sink).await;

    let out = &cfg.client.output;
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| DashError::Io(format!("create {} failed: {e}", dir.display())))?;
    }
    fs::write(out, sink.finish())
        .map_err(|e| DashError::Io(format!("write {} failed: {e}", out.display())))?;
    tracing::info!(path = %out.display(), "export written");
    Ok(())
}
