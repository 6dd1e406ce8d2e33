#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod container;
pub mod dom;
pub mod fetch;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod logging;
pub mod panel;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(logging::default_level()));
    // Ensure <html lang, dir> are set at startup according to saved locale
    crate::i18n::set_lang(&crate::i18n::current_lang());
}

/// Bind the admin panel's triggers to its content container.
///
/// Called by the host page once its markup is in place. `options` is an
/// optional object with `LoaderConfig` fields. Returns whether anything was bound.
///
/// # Errors
/// Throws if the options are invalid or listeners cannot be registered.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initializeAdminPanel)]
pub fn initialize_admin_panel(options: JsValue) -> Result<bool, JsValue> {
    let config = panel::config_from_js(&options)?;
    Ok(panel::initialize(config)?.is_some())
}

/// Switch the language used for panel messages. Returns `false` for unsupported codes.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = setAdminPanelLanguage)]
pub fn set_admin_panel_language(code: &str) -> bool {
    crate::i18n::set_lang(code)
}
