//! Admin Panel Core
//!
//! Platform-agnostic logic behind the admin panel's dynamic content loader:
//! trigger clicks fetch an HTML fragment and swap it into a single container.
//! The browser side lives in `admin-panel-web`, which provides the fetcher and
//! container implementations below.

use async_trait::async_trait;

pub mod config;
pub mod error;
pub mod generation;
pub mod loader;
pub mod outcome;

pub use config::{LoaderConfig, MissingTargetPolicy, StalePolicy};
pub use error::{ConfigError, LoadError};
pub use generation::{RequestGeneration, RequestTicket};
pub use loader::{BindDecision, ContentLoader, SkipReason, plan_binding};
pub use outcome::{ClickOutcome, ErrorMessages, ErrorText, FetchOutcome, FetchResponse};

/// Trait for abstracting the network request behind a trigger
/// Platform-specific implementations should provide this
#[async_trait(?Send)]
pub trait FragmentFetcher {
    /// Perform a plain GET for `url`.
    ///
    /// A response with any status is `Ok`; status classification happens in
    /// the loader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Network`] if no response could be obtained.
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LoadError>;
}

/// Trait for the element whose content gets replaced
pub trait ContentSink {
    /// Replace the entire content with `markup`.
    fn replace_content(&self, markup: &str);

    /// A new request was issued for this container.
    fn loading_started(&self) {}

    /// The latest request finished and its outcome was written.
    fn loading_finished(&self, _outcome: &FetchOutcome) {}
}
