//! Config loader (strict parsing).
//!
//! The file is optional: when it does not exist every section takes its
//! defaults. `PORT` in the environment overrides `host.port`.

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use shelfdash_core::error::{DashError, Result};

pub use schema::{ClientSection, DashConfig, HostSection};

pub const DEFAULT_PATH: &str = "shelfdash.yaml";
pub const PATH_ENV: &str = "SHELFDASH_CONFIG";
pub const PORT_ENV: &str = "PORT";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<DashConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| DashError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DashConfig> {
    let cfg: DashConfig =
        serde_yaml::from_str(s).map_err(|e| DashError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<DashConfig> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => load_from_file(path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(DashConfig::default())
        }
        Err(e) => Err(DashError::Config(format!("stat {} failed: {e}", path.display()))),
    }
}

/// Apply a `PORT` value, if any.
pub fn apply_port_override(cfg: &mut DashConfig, port: Option<&str>) -> Result<()> {
    if let Some(raw) = port {
        cfg.host.port = raw
            .trim()
            .parse()
            .map_err(|_| DashError::Config(format!("{PORT_ENV} must be a port number, got {raw:?}")))?;
    }
    Ok(())
}

/// Load from `SHELFDASH_CONFIG` (or `shelfdash.yaml`) and apply `PORT`.
pub fn load_from_env() -> Result<DashConfig> {
    let path = std::env::var(PATH_ENV).unwrap_or_else(|_| DEFAULT_PATH.to_string());
    let mut cfg = load_or_default(&path)?;
    apply_port_override(&mut cfg, std::env::var(PORT_ENV).ok().as_deref())?;
    Ok(cfg)
}
