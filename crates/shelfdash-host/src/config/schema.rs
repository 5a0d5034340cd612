use std::path::PathBuf;

use serde::Deserialize;
use shelfdash_core::error::{DashError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashConfig {
    pub version: u32,

    #[serde(default)]
    pub host: HostSection,

    #[serde(default)]
    pub client: ClientSection,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            version: 1,
            host: HostSection::default(),
            client: ClientSection::default(),
        }
    }
}

impl DashConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DashError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.host.validate()?;
        self.client.validate()?;
        Ok(())
    }
}

/// Static asset host.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostSection {
    #[serde(default = "default_listen_host")]
    pub listen_host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served at `/`.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Served at `/favicon.ico`; lives outside `root`.
    #[serde(default = "default_favicon")]
    pub favicon: PathBuf,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            listen_host: default_listen_host(),
            port: default_port(),
            root: default_root(),
            favicon: default_favicon(),
        }
    }
}

impl HostSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen_host.trim().is_empty() {
            return Err(DashError::Config("host.listen_host must not be empty".into()));
        }
        if self.root.as_os_str().is_empty() {
            return Err(DashError::Config("host.root must not be empty".into()));
        }
        if self.favicon.as_os_str().is_empty() {
            return Err(DashError::Config("host.favicon must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }
}

fn default_listen_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}
fn default_root() -> PathBuf {
    PathBuf::from("static")
}
fn default_favicon() -> PathBuf {
    PathBuf::from("favicon.ico")
}

/// Dashboard client.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Explicit API origin; wins over everything else when non-empty.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Origin the dashboard page is served from.
    #[serde(default = "default_page_origin")]
    pub page_origin: String,

    /// Where `shelfdash-render` writes its one-off export.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            api_base: None,
            page_origin: default_page_origin(),
            output: default_output(),
        }
    }
}

impl ClientSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.page_origin.starts_with("http://") || self.page_origin.starts_with("https://")) {
            return Err(DashError::Config(
                "client.page_origin must start with http:// or https://".into(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(DashError::Config("client.output must not be empty".into()));
        }
        Ok(())
    }
}

fn default_page_origin() -> String {
    "http://localhost:3000".into()
}
fn default_output() -> PathBuf {
    PathBuf::from("dashboard.html")
}
