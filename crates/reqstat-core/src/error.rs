//! Shared error type across reqstat crates.

use thiserror::Error;

/// Coarse classification of a non-204 collector response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 4xx: the collector rejected the payload. Usually persistent.
    Client,
    /// 5xx: the collector failed. Usually transient.
    Server,
    /// Anything else that is not 204 (1xx, other 2xx, 3xx).
    Unexpected,
}

impl StatusClass {
    pub fn from_code(status: u16) -> Self {
        match status {
            400..=499 => StatusClass::Client,
            500..=599 => StatusClass::Server,
            _ => StatusClass::Unexpected,
        }
    }

    /// String representation used as a structured log field.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Client => "client",
            StatusClass::Server => "server",
            StatusClass::Unexpected => "unexpected",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected response code {status}")]
    UnexpectedStatus { status: u16 },
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatsError {
    /// Classify a collector status error. `None` for every other variant.
    pub fn status_class(&self) -> Option<StatusClass> {
        match self {
            StatsError::UnexpectedStatus { status } => Some(StatusClass::from_code(*status)),
            _ => None,
        }
    }
}
