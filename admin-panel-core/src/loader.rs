//! Click-driven fragment loading into a single container
use crate::config::{LoaderConfig, MissingTargetPolicy, StalePolicy};
use crate::generation::RequestGeneration;
use crate::outcome::{ClickOutcome, ErrorMessages, ErrorText, FetchOutcome};
use crate::{ContentSink, FragmentFetcher};

/// Why `initialize` declined to bind anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoTriggers,
    NoContainer,
    /// Neither triggers nor container exist; the page simply has no panel.
    NothingToBind,
}

impl SkipReason {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NoTriggers => "container present but no trigger elements matched",
            Self::NoContainer => "trigger elements matched but the content container is missing",
            Self::NothingToBind => "no trigger elements and no content container",
        }
    }

    /// Only one half of the panel is on the page.
    #[must_use]
    pub const fn is_partial(self) -> bool {
        matches!(self, Self::NoTriggers | Self::NoContainer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindDecision {
    Bind,
    Skip(SkipReason),
}

/// Decide whether listeners should be attached. Skipping is never an error.
#[must_use]
pub fn plan_binding(
    trigger_count: usize,
    container_present: bool,
    policy: MissingTargetPolicy,
) -> BindDecision {
    let reason = match (trigger_count, container_present) {
        (0, false) => SkipReason::NothingToBind,
        (0, true) => SkipReason::NoTriggers,
        (_, false) => SkipReason::NoContainer,
        (_, true) => return BindDecision::Bind,
    };

    if policy == MissingTargetPolicy::Warn && reason.is_partial() {
        log::warn!("admin panel not bound: {}", reason.describe());
    } else {
        log::debug!("admin panel not bound: {}", reason.describe());
    }
    BindDecision::Skip(reason)
}

/// Loads fragments into one container on behalf of any number of triggers.
///
/// Shared between all trigger handlers on the page (wrap it in an `Rc`). Each
/// call to [`ContentLoader::handle_click`] is an independent operation; the
/// request generation decides which of them may still write to the container.
pub struct ContentLoader<F, S, M = ErrorMessages> {
    config: LoaderConfig,
    fetcher: F,
    container: S,
    messages: M,
    generation: RequestGeneration,
}

impl<F, S, M> ContentLoader<F, S, M>
where
    F: FragmentFetcher,
    S: ContentSink,
    M: ErrorText,
{
    #[must_use]
    pub fn new(config: LoaderConfig, fetcher: F, container: S, messages: M) -> Self {
        Self {
            config,
            fetcher,
            container,
            messages,
            generation: RequestGeneration::new(),
        }
    }

    /// Build a loader if the page has both triggers and a container.
    ///
    /// Returns `None` (and binds nothing) otherwise.
    #[must_use]
    pub fn initialize(
        config: LoaderConfig,
        trigger_count: usize,
        container: Option<S>,
        fetcher: F,
        messages: M,
    ) -> Option<Self> {
        match plan_binding(trigger_count, container.is_some(), config.missing_targets) {
            BindDecision::Bind => {
                log::debug!(
                    "binding {trigger_count} trigger(s) to #{}",
                    config.container_id
                );
                container.map(|container| Self::new(config, fetcher, container, messages))
            }
            BindDecision::Skip(_) => None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[must_use]
    pub const fn container(&self) -> &S {
        &self.container
    }

    #[must_use]
    pub const fn generation(&self) -> &RequestGeneration {
        &self.generation
    }

    /// Run the load for one click, given the trigger's raw URL attribute.
    ///
    /// Suppressing the browser's default navigation is the caller's job; this
    /// covers everything after it.
    #[allow(clippy::future_not_send)] // Fetchers in the browser are not `Send`.
    pub async fn handle_click(&self, raw_url: Option<&str>) -> ClickOutcome {
        let Some(url) = raw_url.map(str::trim).filter(|url| !url.is_empty()) else {
            log::debug!(
                "trigger without `{}` attribute ignored",
                self.config.url_attribute
            );
            return ClickOutcome::Ignored;
        };

        let ticket = self.generation.issue();
        self.container.loading_started();
        log::debug!("request {} loading {url}", ticket.value());

        let outcome = FetchOutcome::from_result(self.fetcher.fetch(url).await);
        if let FetchOutcome::Failed(err) = &outcome {
            log::warn!("failed to load {url}: {err}");
        }

        let current = self.generation.is_current(ticket);
        if !current && self.config.stale_responses == StalePolicy::Discard {
            log::debug!(
                "request {} superseded by {}, discarding {url}",
                ticket.value(),
                self.generation.latest()
            );
            return ClickOutcome::Superseded(outcome);
        }

        self.container.replace_content(&outcome.render(&self.messages));
        if current {
            self.container.loading_finished(&outcome);
        }
        ClickOutcome::Applied(outcome)
    }
}
