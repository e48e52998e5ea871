//! Browser adapters and the wasm entry point.
//!
//! ## Usage
//!
//! ```javascript,ignore
//! import init, { mountVersionSelector } from './doc_version_select.js';
//!
//! window.addEventListener("DOMContentLoaded", async () => {
//!     await init();
//!     await mountVersionSelector(JSON.stringify({ redirect_strategy: "preserve_path" }));
//! });
//! ```

mod dom;
mod fetch;
mod navigator;

pub use dom::BrowserHeaderDom;
pub use fetch::BrowserManifestSource;
pub use navigator::WindowNavigator;

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::application::VersionSelector;
use crate::config::SelectorConfig;

/// Mounts the version selector on the current page.
///
/// `config_json` is an optional JSON object with `SelectorConfig` keys.
/// Resolves to `true` when the dropdown was inserted. Selector failures
/// resolve to `false`; only an invalid configuration rejects.
#[wasm_bindgen(js_name = mountVersionSelector)]
pub async fn mount_version_selector(config_json: Option<String>) -> Result<bool, JsValue> {
    let config = match config_json {
        Some(text) => SelectorConfig::from_json(&text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => SelectorConfig::default(),
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let page_url = match document.base_uri()? {
        Some(url) => url,
        None => return Ok(false),
    };

    let dom = BrowserHeaderDom::new(
        window.clone(),
        document,
        config.dom.container_id.clone(),
        config.dom.title_id.clone(),
    );
    let selector = VersionSelector::new(
        Arc::new(BrowserManifestSource::new(window.clone())),
        Arc::new(dom),
        Arc::new(WindowNavigator::new(window)),
        config,
    );

    Ok(selector.mount(&page_url).await.is_some())
}
