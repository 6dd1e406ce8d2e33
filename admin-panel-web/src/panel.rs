//! Wiring the content loader into the page
use std::rc::Rc;

use admin_panel_core::{ConfigError, ContentLoader, LoaderConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::container::PanelContainer;
use crate::dom;
use crate::fetch::BrowserFetcher;
use crate::i18n::LocalizedErrors;

pub type PanelLoader = ContentLoader<BrowserFetcher, PanelContainer, LocalizedErrors>;

/// Set on a trigger once its click listener is registered.
pub const BOUND_MARKER: &str = "data-admin-panel-bound";

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("invalid admin panel options: {0}")]
    Options(String),
    #[error("invalid admin panel configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<PanelError> for JsValue {
    fn from(err: PanelError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Read a `LoaderConfig` from an optional JS options object.
///
/// `undefined` and `null` select the defaults.
///
/// # Errors
/// Returns an error if the object does not match the config shape or fails validation.
pub fn config_from_js(options: &JsValue) -> Result<LoaderConfig, PanelError> {
    let config = if options.is_undefined() || options.is_null() {
        LoaderConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<LoaderConfig>(options.clone())
            .map_err(|err| PanelError::Options(err.to_string()))?
    };
    config.validate()?;
    Ok(config)
}

/// Bind every trigger on the current page to the content container.
///
/// Returns `Ok(None)` without touching the page when the triggers or the
/// container are missing. Triggers bound by an earlier call are skipped, so
/// every trigger carries exactly one listener.
///
/// # Errors
/// Returns an error if the trigger selector is invalid or a listener cannot be registered.
pub fn initialize(config: LoaderConfig) -> Result<Option<Rc<PanelLoader>>, PanelError> {
    let Some(doc) = dom::document() else {
        log::debug!("no document available, admin panel not bound");
        return Ok(None);
    };

    let matched = dom::query_all(&doc, &config.trigger_selector)
        .map_err(|err| PanelError::Dom(dom::js_error_message(&err)))?;
    let already_bound = matched
        .iter()
        .filter(|trigger| trigger.has_attribute(BOUND_MARKER))
        .count();
    if already_bound > 0 && already_bound == matched.len() {
        log::debug!("all {already_bound} trigger(s) already bound, nothing to do");
        return Ok(None);
    }
    let triggers: Vec<Element> = matched
        .into_iter()
        .filter(|trigger| !trigger.has_attribute(BOUND_MARKER))
        .collect();
    let container = doc
        .get_element_by_id(&config.container_id)
        .map(|element| PanelContainer::new(element, config.status_region_id.clone()));

    let Some(loader) = ContentLoader::initialize(
        config,
        triggers.len(),
        container,
        BrowserFetcher,
        LocalizedErrors,
    ) else {
        return Ok(None);
    };

    let loader = Rc::new(loader);
    for trigger in &triggers {
        attach_click(trigger, &loader)
            .map_err(|err| PanelError::Dom(dom::js_error_message(&err)))?;
    }
    log::info!(
        "admin panel bound to #{} with {} trigger(s)",
        loader.config().container_id,
        triggers.len()
    );
    Ok(Some(loader))
}

/// Register the click listener for one trigger. Lives as long as the page.
fn attach_click(trigger: &Element, loader: &Rc<PanelLoader>) -> Result<(), JsValue> {
    let loader = Rc::clone(loader);
    let target = trigger.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let url = target.get_attribute(&loader.config().url_attribute);
        let loader = Rc::clone(&loader);
        wasm_bindgen_futures::spawn_local(async move {
            loader.handle_click(url.as_deref()).await;
        });
    });
    trigger.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    trigger.set_attribute(BOUND_MARKER, "")?;
    Ok(())
}
