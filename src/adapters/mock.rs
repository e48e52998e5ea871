//! In-memory adapters for testing.
//!
//! These adapters implement the `ManifestSource`, `HeaderDom` and
//! `Navigator` ports so the whole selector flow runs without a browser.
//!
//! # Example
//!
//! ```ignore
//! use doc_version_select::adapters::mock::{MockHeaderDom, MockManifestSource, RecordingNavigator};
//!
//! let source = MockManifestSource::new().with_body(r#"[{"version":"dev","title":"Dev","aliases":[]}]"#);
//! let dom = MockHeaderDom::new();
//! let navigator = RecordingNavigator::new();
//!
//! // ... mount the selector, then simulate the reader:
//! dom.choose("dev");
//! assert_eq!(navigator.visits().len(), 1);
//! ```

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::RenderError;
use crate::domain::version::SelectOption;
use crate::ports::{ChangeHandler, FetchError, HeaderDom, ManifestSource, Navigator};

/// Mock manifest source serving a fixed body.
///
/// Without a body every fetch fails with `Status(404)`.
#[derive(Debug, Default)]
pub struct MockManifestSource {
    body: Option<String>,
    /// Optional error to return for all fetches (for error testing)
    force_error: Option<FetchError>,
    requests: RwLock<Vec<String>>,
}

impl MockManifestSource {
    /// Creates a source with nothing to serve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for every request.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Forces all fetches to return the specified error.
    pub fn with_error(mut self, error: FetchError) -> Self {
        self.force_error = Some(error);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl ManifestSource for MockManifestSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.write().unwrap().push(url.to_string());

        if let Some(error) = self.force_error.clone() {
            return Err(error);
        }
        self.body.clone().ok_or(FetchError::Status(404))
    }
}

/// Select control as installed into the mock page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledSelect {
    pub options: Vec<SelectOption>,
    pub css_class: String,
}

#[derive(Debug, Default)]
struct DomState {
    select: Option<InstalledSelect>,
    container_height: Option<String>,
    placed_after_title: bool,
}

/// Mock page header.
///
/// By default the page has both the container and the title, the title sits
/// in a plain parent and reports a height of `48px`.
pub struct MockHeaderDom {
    container_id: String,
    title_id: String,
    has_container: bool,
    has_title: bool,
    title_parent_classes: Vec<String>,
    title_height: Option<String>,
    fail_height: bool,
    state: RwLock<DomState>,
    on_change: RwLock<Option<ChangeHandler>>,
}

impl MockHeaderDom {
    /// Creates a page with the default element ids.
    pub fn new() -> Self {
        Self {
            container_id: "version-selector".to_string(),
            title_id: "site-title".to_string(),
            has_container: true,
            has_title: true,
            title_parent_classes: Vec::new(),
            title_height: Some("48px".to_string()),
            fail_height: false,
            state: RwLock::new(DomState::default()),
            on_change: RwLock::new(None),
        }
    }

    /// Removes the container element from the page.
    pub fn without_container(mut self) -> Self {
        self.has_container = false;
        self
    }

    /// Removes the title element from the page.
    pub fn without_title(mut self) -> Self {
        self.has_title = false;
        self
    }

    /// Adds a class to the title's parent element.
    pub fn with_title_parent_class(mut self, class: impl Into<String>) -> Self {
        self.title_parent_classes.push(class.into());
        self
    }

    /// Sets the computed height reported for the title.
    pub fn with_title_height(mut self, height: Option<&str>) -> Self {
        self.title_height = height.map(str::to_string);
        self
    }

    /// Makes every height query fail.
    pub fn with_failing_height(mut self) -> Self {
        self.fail_height = true;
        self
    }

    /// Simulates the reader picking `value`. Returns false if no select
    /// control was installed.
    pub fn choose(&self, value: &str) -> bool {
        match self.on_change.read().unwrap().as_ref() {
            Some(handler) => {
                handler(value);
                true
            }
            None => false,
        }
    }

    /// The installed select control, if any.
    pub fn installed(&self) -> Option<InstalledSelect> {
        self.state.read().unwrap().select.clone()
    }

    pub fn container_height(&self) -> Option<String> {
        self.state.read().unwrap().container_height.clone()
    }

    pub fn is_placed_after_title(&self) -> bool {
        self.state.read().unwrap().placed_after_title
    }

    /// True when the selector never modified the page.
    pub fn is_untouched(&self) -> bool {
        let state = self.state.read().unwrap();
        state.select.is_none() && state.container_height.is_none() && !state.placed_after_title
    }

    fn title(&self) -> Result<(), RenderError> {
        if self.has_title {
            Ok(())
        } else {
            Err(RenderError::MissingElement(self.title_id.clone()))
        }
    }

    fn container(&self) -> Result<(), RenderError> {
        if self.has_container {
            Ok(())
        } else {
            Err(RenderError::MissingElement(self.container_id.clone()))
        }
    }
}

impl Default for MockHeaderDom {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderDom for MockHeaderDom {
    fn install_select(
        &self,
        options: &[SelectOption],
        css_class: &str,
        on_change: ChangeHandler,
    ) -> Result<(), RenderError> {
        self.container()?;
        self.state.write().unwrap().select = Some(InstalledSelect {
            options: options.to_vec(),
            css_class: css_class.to_string(),
        });
        *self.on_change.write().unwrap() = Some(on_change);
        Ok(())
    }

    fn title_parent_has_class(&self, class: &str) -> Result<bool, RenderError> {
        self.title()?;
        Ok(self.title_parent_classes.iter().any(|c| c == class))
    }

    fn title_height(&self) -> Result<Option<String>, RenderError> {
        self.title()?;
        if self.fail_height {
            return Err(RenderError::Dom("computed style unavailable".to_string()));
        }
        Ok(self.title_height.clone())
    }

    fn set_container_height(&self, height: &str) -> Result<(), RenderError> {
        self.container()?;
        self.state.write().unwrap().container_height = Some(height.to_string());
        Ok(())
    }

    fn place_container_after_title(&self) -> Result<(), RenderError> {
        self.container()?;
        self.title()?;
        self.state.write().unwrap().placed_after_title = true;
        Ok(())
    }
}

/// Navigator that records visits instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RwLock<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs navigated to, in order.
    pub fn visits(&self) -> Vec<String> {
        self.visits.read().unwrap().clone()
    }

    pub fn last_visit(&self) -> Option<String> {
        self.visits.read().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visits.write().unwrap().push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manifest_source_serves_body_and_records_request() {
        let source = MockManifestSource::new().with_body("[]");
        let body = source.fetch("https://x/versions.json").await.unwrap();
        assert_eq!(body, "[]");
        assert_eq!(source.requests(), vec!["https://x/versions.json"]);
    }

    #[tokio::test]
    async fn manifest_source_without_body_is_not_found() {
        let source = MockManifestSource::new();
        assert_eq!(
            source.fetch("https://x/versions.json").await,
            Err(FetchError::Status(404))
        );
    }

    #[tokio::test]
    async fn manifest_source_forced_error_wins() {
        let source = MockManifestSource::new()
            .with_body("[]")
            .with_error(FetchError::Network("offline".into()));
        assert_eq!(
            source.fetch("https://x/versions.json").await,
            Err(FetchError::Network("offline".into()))
        );
    }

    #[test]
    fn header_dom_rejects_install_without_container() {
        let dom = MockHeaderDom::new().without_container();
        let result = dom.install_select(&[], "form-control", Box::new(|_| {}));
        assert_eq!(
            result,
            Err(RenderError::MissingElement("version-selector".into()))
        );
        assert!(dom.is_untouched());
    }

    #[test]
    fn header_dom_choose_requires_installed_select() {
        let dom = MockHeaderDom::new();
        assert!(!dom.choose("dev"));
    }

    #[test]
    fn navigator_records_visits() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("https://x/dev/");
        navigator.navigate("https://x/1.0.0/");
        assert_eq!(navigator.visits().len(), 2);
        assert_eq!(navigator.last_visit().as_deref(), Some("https://x/1.0.0/"));
    }
}
