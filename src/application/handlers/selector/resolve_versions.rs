//! ResolveVersions - Query handler computing the dropdown for a page.
//!
//! Resolve the page's version token, fetch the manifest, match the token to
//! a real version and build the visible options. Nothing is rendered.

use std::sync::Arc;

use crate::config::SelectorConfig;
use crate::domain::foundation::SelectorError;
use crate::domain::version::{PageContext, SelectOption, VersionManifest};
use crate::ports::ManifestSource;

/// Query for the versions offered on the page at `page_url`.
#[derive(Debug, Clone)]
pub struct ResolveVersionsQuery {
    pub page_url: String,
}

/// The page's context and the dropdown it should show.
#[derive(Debug, Clone)]
pub struct ResolvedVersions {
    pub context: PageContext,
    pub real_version: String,
    pub options: Vec<SelectOption>,
}

impl ResolvedVersions {
    /// Returns true if `version` is one of the offered options.
    pub fn offers(&self, version: &str) -> bool {
        self.options.iter().any(|o| o.value == version)
    }
}

/// Handler for resolving the offered versions.
pub struct ResolveVersionsHandler {
    source: Arc<dyn ManifestSource>,
    config: SelectorConfig,
}

impl ResolveVersionsHandler {
    pub fn new(source: Arc<dyn ManifestSource>, config: SelectorConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub async fn handle(&self, query: ResolveVersionsQuery) -> Result<ResolvedVersions, SelectorError> {
        // 1. Find the version token in the page URL
        let context = self.config.url_strategy().resolve(&query.page_url)?;

        // 2. Fetch the manifest next to the version directories
        let manifest = self.load_manifest(&context).await?;

        // 3. Map the token (possibly an alias) to the real version
        let real_version = manifest
            .resolve(context.current_token().as_str())?
            .version
            .clone();

        // 4. Build the dropdown
        let options = manifest.visible_options(&real_version);

        Ok(ResolvedVersions {
            context,
            real_version,
            options,
        })
    }

    async fn load_manifest(&self, context: &PageContext) -> Result<VersionManifest, SelectorError> {
        let url = context.manifest_url(&self.config.manifest_file);

        tracing::debug!("Fetching version manifest from {}", url);

        let body = self
            .source
            .fetch(&url)
            .await
            .map_err(|e| SelectorError::manifest_unavailable(&url, e))?;

        let manifest = VersionManifest::from_json(&body)
            .map_err(|e| SelectorError::manifest_unavailable(&url, e))?;

        if let Err(e) = manifest.validate() {
            if self.config.strict_manifest {
                return Err(SelectorError::manifest_unavailable(&url, e));
            }
            tracing::warn!("Version manifest at {} is inconsistent: {}", url, e);
        }

        Ok(manifest)
    }
}
