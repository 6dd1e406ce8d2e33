//! Browser `fetch` behind the core fetcher trait
use admin_panel_core::{FetchResponse, FragmentFetcher, LoadError};
use async_trait::async_trait;

use crate::dom;

/// Plain GET through `window.fetch`, no body and no custom headers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFetcher;

#[async_trait(?Send)]
impl FragmentFetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LoadError> {
        let network = |err: wasm_bindgen::JsValue| LoadError::Network(dom::js_error_message(&err));

        let response = dom::fetch_response(url).await.map_err(network)?;
        let status = response.status();
        if !response.ok() {
            // The body is never shown for failed loads.
            return Ok(FetchResponse::new(status, String::new()));
        }
        let body = dom::response_text(&response).await.map_err(network)?;
        Ok(FetchResponse::new(status, body))
    }
}
