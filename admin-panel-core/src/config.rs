//! Loader configuration
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TRIGGER_SELECTOR: &str = "a[data-url]";
pub const DEFAULT_URL_ATTRIBUTE: &str = "data-url";
pub const DEFAULT_CONTAINER_ID: &str = "admin-content";

/// What to do with a response whose request is no longer the latest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Drop the result; only the most recently issued request may touch the container.
    #[default]
    Discard,
    /// Apply every result as it resolves (last resolved wins).
    Apply,
}

/// How `initialize` reports a page that is missing triggers or the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTargetPolicy {
    #[default]
    Silent,
    /// Log a warning when only one of triggers/container is present.
    Warn,
}

/// Configuration for a content loader instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// CSS selector matching trigger elements
    pub trigger_selector: String,
    /// Attribute on the trigger holding the fragment URL
    pub url_attribute: String,
    /// Id of the element whose content gets replaced
    pub container_id: String,
    pub stale_responses: StalePolicy,
    pub missing_targets: MissingTargetPolicy,
    /// Id of an `aria-live` region for load announcements, if any
    pub status_region_id: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            trigger_selector: DEFAULT_TRIGGER_SELECTOR.to_string(),
            url_attribute: DEFAULT_URL_ATTRIBUTE.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            stale_responses: StalePolicy::default(),
            missing_targets: MissingTargetPolicy::default(),
            status_region_id: None,
        }
    }
}

impl LoaderConfig {
    /// Parse and validate a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a required field is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every selector and identifier is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("trigger_selector", &self.trigger_selector),
            ("url_attribute", &self.url_attribute),
            ("container_id", &self.container_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        if self
            .status_region_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(ConfigError::Empty {
                field: "status_region_id",
            });
        }
        Ok(())
    }
}
