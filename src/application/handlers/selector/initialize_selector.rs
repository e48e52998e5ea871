//! InitializeSelector - Command handler mounting the version dropdown.
//!
//! Runs once per page load: resolve the offered versions, render them and
//! wire the change handler. Every step is terminal on failure; nothing is
//! retried.

use std::sync::Arc;

use super::resolve_versions::{ResolveVersionsHandler, ResolveVersionsQuery, ResolvedVersions};
use super::select_version::{SelectVersionCommand, SelectVersionHandler};
use crate::config::SelectorConfig;
use crate::domain::foundation::{RenderError, SelectorError};
use crate::domain::version::{PageContext, SelectOption};
use crate::ports::{HeaderDom, ManifestSource, Navigator};

/// Command to mount the selector on the page at `page_url`.
#[derive(Debug, Clone)]
pub struct InitializeSelectorCommand {
    pub page_url: String,
}

/// Handler for mounting the selector.
pub struct InitializeSelectorHandler {
    resolver: ResolveVersionsHandler,
    dom: Arc<dyn HeaderDom>,
    navigator: Arc<dyn Navigator>,
}

impl InitializeSelectorHandler {
    pub fn new(
        source: Arc<dyn ManifestSource>,
        dom: Arc<dyn HeaderDom>,
        navigator: Arc<dyn Navigator>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            resolver: ResolveVersionsHandler::new(source, config),
            dom,
            navigator,
        }
    }

    pub async fn handle(
        &self,
        cmd: InitializeSelectorCommand,
    ) -> Result<ResolvedVersions, SelectorError> {
        let resolved = self
            .resolver
            .handle(ResolveVersionsQuery {
                page_url: cmd.page_url,
            })
            .await?;

        self.render(&resolved.context, &resolved.options)?;

        tracing::debug!(
            token = %resolved.context.current_token(),
            real_version = %resolved.real_version,
            "Mounted version selector with {} options",
            resolved.options.len()
        );

        Ok(resolved)
    }

    fn config(&self) -> &SelectorConfig {
        self.resolver.config()
    }

    fn render(&self, context: &PageContext, options: &[SelectOption]) -> Result<(), SelectorError> {
        let select = SelectVersionHandler::new(self.navigator.clone(), self.config().redirect_strategy);
        let page = context.clone();
        let on_change = Box::new(move |value: &str| {
            select.handle(SelectVersionCommand {
                context: page.clone(),
                chosen: value.to_string(),
            });
        });

        self.dom
            .install_select(options, &self.config().dom.select_class, on_change)?;

        if let Err(e) = self.match_title_height() {
            tracing::debug!("Skipped header height matching: {}", e);
        }

        self.dom.place_container_after_title()?;
        Ok(())
    }

    /// Copies the title height onto the container when the title sits in the
    /// theme's header title wrapper. Cosmetic only.
    fn match_title_height(&self) -> Result<(), RenderError> {
        if !self
            .dom
            .title_parent_has_class(&self.config().dom.header_title_class)?
        {
            return Ok(());
        }
        if let Some(height) = self.dom.title_height()? {
            self.dom.set_container_height(&height)?;
        }
        Ok(())
    }
}
