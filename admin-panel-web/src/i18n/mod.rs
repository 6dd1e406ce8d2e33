mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, is_rtl, set_lang};
pub use locales::{DEFAULT_LOCALE, LocaleMeta, locales};
pub use render::{t, tr};

use admin_panel_core::ErrorText;

/// Error messages looked up in the active locale each time a load fails,
/// so a language switch applies to the next failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalizedErrors;

impl ErrorText for LocalizedErrors {
    fn status_error(&self) -> String {
        t("panel.error.status")
    }

    fn network_error(&self) -> String {
        t("panel.error.network")
    }
}
