use crate::i18n::locales::{DEFAULT_LOCALE, find_locale, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const LOCALE_STORAGE_KEY: &str = "admin_panel.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let meta = find_locale(lang)?;
    let fallback = load_translations(DEFAULT_LOCALE)?;
    let translations = load_translations(meta.code)?;

    Some(I18nBundle {
        lang: meta.code.to_string(),
        rtl: meta.rtl,
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LOCALE.to_string(),
        rtl: false,
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

fn saved_lang() -> Option<String> {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        None
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        saved_lang()
            .and_then(|lang| build_bundle(&lang))
            .or_else(|| build_bundle(DEFAULT_LOCALE))
            .unwrap_or_else(empty_bundle),
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Set the current language for panel messages
///
/// Updates `<html lang dir>` and persists the choice to localStorage.
/// Returns `false` and leaves the current language in place for unknown codes.
pub fn set_lang(lang: &str) -> bool {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang:?}, keeping {}", current_lang());
        return false;
    };
    CURRENT.with(|cell| cell.replace(bundle));

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            with_bundle(|read| {
                let _ = el.set_attribute("lang", &read.lang);
                let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
            });
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
        }
    }
    true
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.rtl)
}
