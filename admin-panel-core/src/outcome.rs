//! Request results and how they render into the container
use crate::error::LoadError;

/// Raw response delivered by a [`crate::FragmentFetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same range the Fetch API reports as `Response.ok`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one fetch, after status classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fragment(String),
    Failed(LoadError),
}

impl FetchOutcome {
    /// Classify a fetch result. A non-success status discards the body.
    #[must_use]
    pub fn from_result(result: Result<FetchResponse, LoadError>) -> Self {
        match result {
            Ok(response) if response.is_success() => Self::Fragment(response.body),
            Ok(response) => Self::Failed(LoadError::Status {
                status: response.status,
            }),
            Err(err) => Self::Failed(err),
        }
    }

    #[must_use]
    pub const fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment(_))
    }

    /// Markup to write into the container for this outcome.
    #[must_use]
    pub fn render(&self, text: &impl ErrorText) -> String {
        match self {
            Self::Fragment(body) => body.clone(),
            Self::Failed(LoadError::Status { .. }) => text.status_error(),
            Self::Failed(LoadError::Network(_)) => text.network_error(),
        }
    }
}

/// What happened to a single click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No usable URL on the trigger; nothing was requested.
    Ignored,
    /// The outcome was written to the container.
    Applied(FetchOutcome),
    /// A newer request was issued before this one resolved; the container was left alone.
    Superseded(FetchOutcome),
}

/// Source of the fixed messages shown when a load fails.
pub trait ErrorText {
    fn status_error(&self) -> String;
    fn network_error(&self) -> String;
}

/// Fixed, pre-resolved error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    pub status: String,
    pub network: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            status: "An error occurred while loading this section.".to_string(),
            network: "The server could not be reached. Check your connection and try again."
                .to_string(),
        }
    }
}

impl ErrorText for ErrorMessages {
    fn status_error(&self) -> String {
        self.status.clone()
    }

    fn network_error(&self) -> String {
        self.network.clone()
    }
}
