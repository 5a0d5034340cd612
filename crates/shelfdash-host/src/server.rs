//! Bind and serve.
//!
//! A bind failure is returned to the caller and is fatal for the binary;
//! there is no retry.

use axum::Router;
use tokio::net::TcpListener;

use shelfdash_core::error::{DashError, Result};

use crate::config::HostSection;

pub async fn bind(host: &HostSection) -> Result<TcpListener> {
    let addr = host.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| DashError::Io(format!("bind {addr} failed: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| DashError::Io(format!("local_addr failed: {e}")))?;
    tracing::info!(%local, root = %host.root.display(), "serving static files on http://{local}");
    Ok(listener)
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .await
        .map_err(|e| DashError::Io(format!("server failed: {e}")))
}
