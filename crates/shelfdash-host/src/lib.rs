//! shelfdash host library entry.
//!
//! Wires configuration, the asset host, and the dashboard client.
//! Consumed by the two binaries (`shelfdash-host`, `shelfdash-render`) and by
//! integration tests.

pub mod app_state;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod router;
pub mod server;

/// `tracing_subscriber::fmt` with `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
