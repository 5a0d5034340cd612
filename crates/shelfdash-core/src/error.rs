//! Shared error type across shelfdash crates.

use thiserror::Error;

/// Stable error codes, used in logs and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid or unreadable configuration.
    Config,
    /// Network failure talking to the metrics API.
    Transport,
    /// Response body is not the JSON document we expected.
    Decode,
    /// Local I/O (bind, file write).
    Io,
    /// Rendering a view failed.
    Render,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::Decode => "DECODE",
            ErrorCode::Io => "IO",
            ErrorCode::Render => "RENDER",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DashError>;

/// Unified error type used by core and host.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("io: {0}")]
    Io(String),
    #[error("render: {0}")]
    Render(String),
}

impl DashError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DashError::Config(_) => ErrorCode::Config,
            DashError::Transport(_) => ErrorCode::Transport,
            DashError::Decode(_) => ErrorCode::Decode,
            DashError::Io(_) => ErrorCode::Io,
            DashError::Render(_) => ErrorCode::Render,
        }
    }
}
