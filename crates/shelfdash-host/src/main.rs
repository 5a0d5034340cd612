//! shelfdash asset host.
//!
//! Serves the dashboard at `/` (fetched from the metrics API on every
//! request), `host.root` for everything else, plus `/favicon.ico`. Config
//! comes from `shelfdash.yaml` (or `$SHELFDASH_CONFIG`); `PORT` overrides
//! the port.

use shelfdash_core::error::Result;
use shelfdash_host::{app_state::AppState, config, init_tracing, router, server};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = config::load_from_env()?;
    let state = AppState::from_client_config(&cfg.client)?;
    let app = router::build_router(&cfg.host, state);

    let listener = server::bind(&cfg.host).await?;
    server::serve(listener, app).await
}
