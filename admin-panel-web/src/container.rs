//! DOM element backing the content container
use admin_panel_core::{ContentSink, FetchOutcome};
use web_sys::Element;

use crate::{a11y, i18n};

/// The panel's content element plus its optional live region.
pub struct PanelContainer {
    element: Element,
    status_region_id: Option<String>,
}

impl PanelContainer {
    #[must_use]
    pub const fn new(element: Element, status_region_id: Option<String>) -> Self {
        Self {
            element,
            status_region_id,
        }
    }

    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    fn announce(&self, key: &str) {
        if let Some(region) = self.status_region_id.as_deref() {
            a11y::set_status(region, &i18n::t(key));
        }
    }
}

impl ContentSink for PanelContainer {
    fn replace_content(&self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn loading_started(&self) {
        a11y::set_busy(&self.element, true);
        self.announce("panel.loading");
    }

    fn loading_finished(&self, outcome: &FetchOutcome) {
        a11y::set_busy(&self.element, false);
        self.announce(if outcome.is_fragment() {
            "panel.loaded"
        } else {
            "panel.load_failed"
        });
    }
}
