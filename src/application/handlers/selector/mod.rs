//! Version selector command and query handlers.

mod initialize_selector;
mod resolve_versions;
mod select_version;

pub use initialize_selector::{InitializeSelectorCommand, InitializeSelectorHandler};
pub use resolve_versions::{ResolveVersionsHandler, ResolveVersionsQuery, ResolvedVersions};
pub use select_version::{SelectVersionCommand, SelectVersionHandler, SelectVersionResult};

use std::sync::Arc;

use crate::config::SelectorConfig;
use crate::domain::foundation::ErrorCode;
use crate::ports::{HeaderDom, ManifestSource, Navigator};

/// Entry point used by page integrations.
///
/// Wraps [`InitializeSelectorHandler`] and swallows its errors: the dropdown
/// is an enhancement, so a failure only means it does not appear.
pub struct VersionSelector {
    handler: InitializeSelectorHandler,
}

impl VersionSelector {
    pub fn new(
        source: Arc<dyn ManifestSource>,
        dom: Arc<dyn HeaderDom>,
        navigator: Arc<dyn Navigator>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            handler: InitializeSelectorHandler::new(source, dom, navigator, config),
        }
    }

    /// Mounts the selector for `page_url`. Returns `None` when the page gets
    /// no dropdown.
    pub async fn mount(&self, page_url: &str) -> Option<ResolvedVersions> {
        let cmd = InitializeSelectorCommand {
            page_url: page_url.to_string(),
        };

        match self.handler.handle(cmd).await {
            Ok(result) => Some(result),
            Err(e) => {
                match e.code() {
                    // Unversioned pages are expected
                    ErrorCode::VersionNotFound => tracing::debug!("{}", e),
                    _ => tracing::warn!(code = %e.code(), "Version selector disabled: {}", e),
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHeaderDom, MockManifestSource, RecordingNavigator};

    #[tokio::test]
    async fn test_mount_returns_none_on_failure() {
        let dom = Arc::new(MockHeaderDom::new());
        let selector = VersionSelector::new(
            Arc::new(MockManifestSource::new()),
            dom.clone(),
            Arc::new(RecordingNavigator::new()),
            SelectorConfig::default(),
        );

        assert!(selector.mount("https://example.org/docs/dev/").await.is_none());
        assert!(dom.is_untouched());
    }

    #[tokio::test]
    async fn test_mount_returns_result_on_success() {
        let selector = VersionSelector::new(
            Arc::new(
                MockManifestSource::new()
                    .with_body(r#"[{"version": "dev", "title": "Dev", "aliases": []}]"#),
            ),
            Arc::new(MockHeaderDom::new()),
            Arc::new(RecordingNavigator::new()),
            SelectorConfig::default(),
        );

        let result = selector.mount("https://example.org/docs/dev/").await.unwrap();
        assert_eq!(result.real_version, "dev");
    }
}
