use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn interpolate(template: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let mut text = template.to_string();
    for (k, v) in args.into_iter().flatten() {
        text = text.replace(&format!("{{{{{k}}}}}"), v);
        text = text.replace(&format!("{{{k}}}"), v);
    }
    text
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(Value::as_str)
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(Value::as_str))
            .map(|template| interpolate(template, args))
    })
}

/// Translate a key to the current language
///
/// Falls back to the default locale, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` / `{{name}}` substitution
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
