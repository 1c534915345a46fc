//! Common error types used across the workspace.
//!
//! Each failure keeps the URL it happened on so it can be reported next to
//! the view that issued the request. Errors are `Clone` because they end up
//! stored in view state.

/// The request never produced a response (connection refused, timeout,
/// aborted fetch, unreadable body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// The response body is not JSON, or not the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid payload from {url}: {message}")]
pub struct DecodeError {
    pub url: String,
    pub message: String,
}

impl DecodeError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Top-level error for a dashboard load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl DashboardError {
    /// URL of the request that failed.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Transport(err) => &err.url,
            Self::Decode(err) => &err.url,
        }
    }
}
