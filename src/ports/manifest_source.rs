//! ManifestSource port - Interface for reading `versions.json`.
//!
//! The selector never talks to the network directly. Adapters decide how a
//! manifest URL is read: `window.fetch` in the browser, `reqwest` or the
//! filesystem natively, an in-memory string in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Port for fetching the raw manifest document.
///
/// Implementations must:
/// - Issue a single read per call (no caching, no retries)
/// - Treat non-success HTTP statuses as errors
/// - Return the body untouched; parsing happens in the domain
///
/// The selector runs on a single thread, so futures are not required to be
/// `Send` and browser adapters may hold `JsValue`s across awaits.
///
/// # Example
///
/// ```ignore
/// let body = source.fetch("https://example.org/docs/versions.json").await?;
/// let manifest = VersionManifest::from_json(&body)?;
/// ```
#[async_trait(?Send)]
pub trait ManifestSource {
    /// Reads the document at `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Errors that can occur while reading the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Read failed: {0}")]
    Io(String),
}
