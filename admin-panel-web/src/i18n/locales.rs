use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
    source: &'static str,
}

pub const DEFAULT_LOCALE: &str = "ru";

const LOCALES: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ru",
        name: "Русский",
        rtl: false,
        source: include_str!("../../i18n/ru.json"),
    },
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
        source: include_str!("../../i18n/en.json"),
    },
    LocaleMeta {
        code: "fr",
        name: "Français",
        rtl: false,
        source: include_str!("../../i18n/fr.json"),
    },
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
        source: include_str!("../../i18n/es.json"),
    },
    LocaleMeta {
        code: "de",
        name: "Deutsch",
        rtl: false,
        source: include_str!("../../i18n/de.json"),
    },
    LocaleMeta {
        code: "it",
        name: "Italiano",
        rtl: false,
        source: include_str!("../../i18n/it.json"),
    },
    LocaleMeta {
        code: "ar",
        name: "العربية",
        rtl: true,
        source: include_str!("../../i18n/ar.json"),
    },
];

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALES
}

#[must_use]
pub fn find_locale(lang: &str) -> Option<&'static LocaleMeta> {
    LOCALES.iter().find(|meta| meta.code == lang)
}

/// Parse the bundled translations for `lang`. `None` for unknown codes or bad JSON.
pub fn load_translations(lang: &str) -> Option<Value> {
    let meta = find_locale(lang)?;
    match serde_json::from_str(meta.source) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("locale {lang} is not valid JSON: {err}");
            None
        }
    }
}
