//! Locale coverage: every bundled locale carries every panel message

use crate::i18n::{self, LocalizedErrors};
use admin_panel_core::{ErrorMessages, ErrorText};
use serde_json::Value;
use std::collections::BTreeSet;

const REQUIRED_KEYS: &[&str] = &[
    "panel.loading",
    "panel.loaded",
    "panel.load_failed",
    "panel.error.status",
    "panel.error.network",
];

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn every_locale_file_is_registered() {
    let registered: BTreeSet<&str> = i18n::locales().iter().map(|m| m.code).collect();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            assert!(registered.contains(stem), "locale '{stem}' is not registered");
        }
    }
}

#[test]
fn locales_have_required_keys() {
    for meta in i18n::locales() {
        let mut keys = BTreeSet::new();
        collect_keys("", &load_locale(meta.code), &mut keys);
        for key in REQUIRED_KEYS {
            assert!(
                keys.contains(*key),
                "Missing key '{key}' in locale '{}'",
                meta.code
            );
        }
    }
}

#[test]
fn switching_language_changes_error_text() {
    assert!(i18n::set_lang("en"));
    let english = LocalizedErrors.status_error();
    assert_eq!(english, "An error occurred while loading this section.");

    assert!(i18n::set_lang("fr"));
    assert_eq!(i18n::current_lang(), "fr");
    assert_eq!(
        LocalizedErrors.status_error(),
        "Erreur lors du chargement de cette section."
    );
    assert_ne!(LocalizedErrors.network_error(), english);
}

#[test]
fn unknown_language_keeps_current_bundle() {
    assert!(i18n::set_lang("de"));
    assert!(!i18n::set_lang("klingon"));
    assert_eq!(i18n::current_lang(), "de");
}

#[test]
fn rtl_flag_follows_locale() {
    assert!(i18n::set_lang("ar"));
    assert!(i18n::is_rtl());
    assert!(i18n::set_lang("en"));
    assert!(!i18n::is_rtl());
}

#[test]
fn missing_key_falls_back_to_key() {
    assert!(i18n::set_lang("en"));
    assert_eq!(i18n::t("panel.missing"), "panel.missing");
}

#[test]
fn russian_is_the_startup_language() {
    assert_eq!(i18n::current_lang(), "ru");
    assert_eq!(LocalizedErrors.status_error(), "Ошибка загрузки раздела.");
    assert_eq!(
        LocalizedErrors.network_error(),
        "Сервер недоступен. Проверьте подключение и повторите попытку."
    );
}

#[test]
fn english_bundle_matches_core_fallback_messages() {
    assert!(i18n::set_lang("en"));
    let defaults = ErrorMessages::default();
    assert_eq!(LocalizedErrors.status_error(), defaults.status);
    assert_eq!(LocalizedErrors.network_error(), defaults.network);
}
