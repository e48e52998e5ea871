//! SelectVersion - Command handler for a changed dropdown selection.

use std::sync::Arc;

use crate::domain::version::{PageContext, RedirectStrategy};
use crate::ports::Navigator;

/// Command issued when the reader picks a version.
#[derive(Debug, Clone)]
pub struct SelectVersionCommand {
    pub context: PageContext,
    pub chosen: String,
}

/// Result of a selection: where the reader was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectVersionResult {
    pub url: String,
}

/// Handler that redirects to the same page under the chosen version.
pub struct SelectVersionHandler {
    navigator: Arc<dyn Navigator>,
    redirect: RedirectStrategy,
}

impl SelectVersionHandler {
    pub fn new(navigator: Arc<dyn Navigator>, redirect: RedirectStrategy) -> Self {
        Self {
            navigator,
            redirect,
        }
    }

    pub fn handle(&self, cmd: SelectVersionCommand) -> SelectVersionResult {
        let url = self.redirect.redirect_url(&cmd.context, &cmd.chosen);

        tracing::debug!(
            from = %cmd.context.current_token(),
            to = %cmd.chosen,
            "Redirecting to {}",
            url
        );

        self.navigator.navigate(&url);
        SelectVersionResult { url }
    }
}
