//! `ManifestSource` over `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::ports::{FetchError, ManifestSource};

/// Fetches the manifest with the page's own `fetch`.
///
/// No timeout is applied; an unanswered request leaves the dropdown absent.
pub struct BrowserManifestSource {
    window: Window,
}

impl BrowserManifestSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl ManifestSource for BrowserManifestSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response
            .text()
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;
        JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?
            .as_string()
            .ok_or_else(|| FetchError::Network("response body is not text".to_string()))
    }
}
