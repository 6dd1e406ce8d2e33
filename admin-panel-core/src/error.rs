//! Error types for fragment loading and configuration

/// Failure of a single fragment request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, aborted, body read failed).
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("Unexpected status {status}")]
    Status { status: u16 },
}

impl LoadError {
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },
}
