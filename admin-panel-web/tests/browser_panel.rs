#![cfg(target_arch = "wasm32")]

use admin_panel_core::{ClickOutcome, FetchOutcome, LoadError, LoaderConfig};
use admin_panel_web::panel::{BOUND_MARKER, PanelLoader};
use admin_panel_web::{dom, i18n, panel};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Build a fresh panel fixture under `<body>` and return its config.
fn fixture(name: &str, links: &[Option<&str>], with_container: bool) -> LoaderConfig {
    let doc = dom::document().expect("document");
    let root = doc.create_element("section").expect("create root");
    root.set_id(&format!("{name}-root"));

    let mut markup = String::new();
    for link in links {
        let url_attr = link.map(|url| format!(r#" data-url="{url}""#)).unwrap_or_default();
        markup.push_str(&format!(
            r#"<a class="{name}-link" href="/nav"{url_attr}>x</a>"#
        ));
    }
    if with_container {
        markup.push_str(&format!(r#"<div id="{name}-content"><p>initial</p></div>"#));
    }
    markup.push_str(&format!(r#"<div id="{name}-status" aria-live="polite"></div>"#));
    root.set_inner_html(&markup);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append fixture");

    LoaderConfig {
        trigger_selector: format!(".{name}-link"),
        container_id: format!("{name}-content"),
        status_region_id: Some(format!("{name}-status")),
        ..LoaderConfig::default()
    }
}

fn click(selector: &str) -> Event {
    let link = dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .expect("trigger");
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = Event::new_with_event_init_dict("click", &init).expect("click event");
    link.dispatch_event(&click).expect("dispatch click");
    click
}

/// Yield until the loader has issued `requests` and the container is no longer busy.
async fn settle(loader: &PanelLoader, container_id: &str, requests: u64) {
    for _ in 0..200 {
        if loader.generation().latest() >= requests
            && element(container_id).get_attribute("aria-busy").is_none()
        {
            return;
        }
        dom::sleep_ms(10).await.expect("sleep");
    }
    panic!("load into #{container_id} did not finish");
}

fn element(id: &str) -> Element {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .expect("fixture element")
}

#[wasm_bindgen_test]
fn dom_helpers_find_window_and_document() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[wasm_bindgen_test]
fn page_without_triggers_is_not_bound() {
    let config = fixture("empty", &[], true);
    let loader = panel::initialize(config).expect("initialize");
    assert!(loader.is_none());
}

#[wasm_bindgen_test]
fn page_without_container_is_not_bound() {
    let config = fixture("orphan", &[Some("/frag/1")], false);
    let loader = panel::initialize(config).expect("initialize");
    assert!(loader.is_none());
}

#[wasm_bindgen_test]
fn click_without_url_prevents_navigation_and_keeps_content() {
    let config = fixture("nourl", &[None], true);
    let loader = panel::initialize(config).expect("initialize").expect("bound");

    let click = click(".nourl-link");

    assert!(click.default_prevented());
    assert_eq!(element("nourl-content").inner_html(), "<p>initial</p>");
    assert_eq!(loader.generation().latest(), 0);
}

#[wasm_bindgen_test]
async fn clicking_trigger_loads_its_fragment() {
    i18n::set_lang("en");
    let config = fixture(
        "clicked",
        &[Some("data:text/html,%3Cp%3EA%3C%2Fp%3E")],
        true,
    );
    let loader = panel::initialize(config).expect("initialize").expect("bound");

    let click = click(".clicked-link");
    assert!(click.default_prevented());
    settle(&loader, "clicked-content", 1).await;

    assert_eq!(loader.generation().latest(), 1);
    assert_eq!(element("clicked-content").inner_html(), "<p>A</p>");
    assert_eq!(
        element("clicked-status").text_content().unwrap_or_default(),
        i18n::t("panel.loaded")
    );
}

#[wasm_bindgen_test]
async fn second_initialize_binds_only_new_triggers() {
    i18n::set_lang("en");
    let config = fixture(
        "twice",
        &[Some("data:text/html,%3Cp%3EA%3C%2Fp%3E")],
        true,
    );
    let first = panel::initialize(config.clone())
        .expect("initialize")
        .expect("bound");
    assert!(
        panel::initialize(config.clone())
            .expect("initialize again")
            .is_none()
    );

    let old_link = dom::document()
        .and_then(|doc| doc.query_selector(".twice-link").ok().flatten())
        .expect("trigger");
    assert!(old_link.has_attribute(BOUND_MARKER));

    let new_link = dom::document()
        .and_then(|doc| doc.create_element("a").ok())
        .expect("create trigger");
    new_link.set_class_name("twice-link twice-late");
    new_link
        .set_attribute("data-url", "data:text/html,%3Cp%3EB%3C%2Fp%3E")
        .expect("set url");
    element("twice-root")
        .append_child(&new_link)
        .expect("append trigger");
    let second = panel::initialize(config)
        .expect("initialize late")
        .expect("late trigger bound");

    click(".twice-link");
    settle(&first, "twice-content", 1).await;
    assert_eq!(first.generation().latest(), 1);
    assert_eq!(second.generation().latest(), 0);
    assert_eq!(element("twice-content").inner_html(), "<p>A</p>");

    click(".twice-late");
    settle(&second, "twice-content", 1).await;
    assert_eq!(first.generation().latest(), 1);
    assert_eq!(second.generation().latest(), 1);
    assert_eq!(element("twice-content").inner_html(), "<p>B</p>");
}

#[wasm_bindgen_test]
async fn successful_fetch_replaces_container() {
    i18n::set_lang("en");
    let config = fixture("ok", &[Some("/frag/1")], true);
    let loader = panel::initialize(config).expect("initialize").expect("bound");

    let outcome = loader
        .handle_click(Some("data:text/html,%3Cp%3EA%3C%2Fp%3E"))
        .await;

    assert_eq!(
        outcome,
        ClickOutcome::Applied(FetchOutcome::Fragment("<p>A</p>".into()))
    );
    let container = element("ok-content");
    assert_eq!(container.inner_html(), "<p>A</p>");
    assert!(container.get_attribute("aria-busy").is_none());
    assert_eq!(
        element("ok-status").text_content().unwrap_or_default(),
        i18n::t("panel.loaded")
    );
}

#[wasm_bindgen_test]
async fn unreachable_server_shows_network_error() {
    i18n::set_lang("en");
    let config = fixture("offline", &[Some("/frag/1")], true);
    let loader = panel::initialize(config).expect("initialize").expect("bound");

    let outcome = loader
        .handle_click(Some("http://127.0.0.1:9/unreachable"))
        .await;

    assert!(matches!(
        outcome,
        ClickOutcome::Applied(FetchOutcome::Failed(LoadError::Network(_)))
    ));
    assert_eq!(
        element("offline-content").text_content().unwrap_or_default(),
        i18n::t("panel.error.network")
    );
}

#[wasm_bindgen_test]
fn options_object_maps_onto_config() {
    let defaults = panel::config_from_js(&JsValue::UNDEFINED).expect("defaults");
    assert_eq!(defaults, LoaderConfig::default());

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"container_id".into(), &"panel".into()).expect("set");
    js_sys::Reflect::set(&options, &"stale_responses".into(), &"apply".into()).expect("set");
    let config = panel::config_from_js(&options.into()).expect("config");
    assert_eq!(config.container_id, "panel");
    assert_eq!(config.trigger_selector, "a[data-url]");

    let blank = js_sys::Object::new();
    js_sys::Reflect::set(&blank, &"trigger_selector".into(), &"".into()).expect("set");
    let err = panel::config_from_js(&blank.into()).expect_err("blank selector");
    assert!(err.to_string().contains("trigger_selector"));
}
