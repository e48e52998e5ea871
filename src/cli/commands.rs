//! CLI command implementations
//!
//! Each command writes its report to `out` so it can be captured in tests.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use super::errors::{CliError, CliResult};
use crate::adapters::{FileManifestSource, ReqwestManifestSource};
use crate::application::{
    ResolveVersionsHandler, ResolveVersionsQuery, SelectVersionCommand, SelectVersionHandler,
};
use crate::config::SelectorConfig;
use crate::domain::version::VersionManifest;
use crate::ports::{ManifestSource, Navigator};

/// Navigator that only reports where the reader would be sent.
struct DryRunNavigator;

impl Navigator for DryRunNavigator {
    fn navigate(&self, url: &str) {
        tracing::info!("Would navigate to {}", url);
    }
}

/// Picks the manifest source: a local file when given, the site otherwise.
pub fn manifest_source(
    config: &SelectorConfig,
    manifest: Option<&Path>,
) -> CliResult<Arc<dyn ManifestSource>> {
    match manifest {
        Some(path) => Ok(Arc::new(FileManifestSource::new(path))),
        None => Ok(Arc::new(ReqwestManifestSource::new(&config.fetch)?)),
    }
}

/// `resolve`: split a page URL into base root, token and doc path.
pub fn resolve(config: &SelectorConfig, url: &str, out: &mut dyn Write) -> CliResult<()> {
    let context = config.url_strategy().resolve(url)?;

    writeln!(out, "base root:    {}", context.base_root())?;
    writeln!(out, "version:      {}", context.current_token())?;
    writeln!(out, "doc path:     {}", context.doc_path())?;
    writeln!(out, "manifest url: {}", context.manifest_url(&config.manifest_file))?;
    Ok(())
}

/// `options`: list the dropdown entries, marking the selected one.
pub async fn options(
    config: &SelectorConfig,
    url: &str,
    source: Arc<dyn ManifestSource>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let handler = ResolveVersionsHandler::new(source, config.clone());
    let resolved = handler
        .handle(ResolveVersionsQuery {
            page_url: url.to_string(),
        })
        .await?;

    for option in &resolved.options {
        let marker = if option.selected { '*' } else { ' ' };
        writeln!(out, "{} {} ({})", marker, option.label, option.value)?;
    }
    Ok(())
}

/// `redirect`: print the URL reached by choosing `to` on the page.
pub async fn redirect(
    config: &SelectorConfig,
    url: &str,
    to: &str,
    source: Arc<dyn ManifestSource>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let handler = ResolveVersionsHandler::new(source, config.clone());
    let resolved = handler
        .handle(ResolveVersionsQuery {
            page_url: url.to_string(),
        })
        .await?;

    if !resolved.offers(to) {
        let choices: Vec<_> = resolved.options.iter().map(|o| o.value.as_str()).collect();
        return Err(CliError::NotOffered {
            version: to.to_string(),
            choices: choices.join(", "),
        });
    }

    let select = SelectVersionHandler::new(Arc::new(DryRunNavigator), config.redirect_strategy);
    let result = select.handle(SelectVersionCommand {
        context: resolved.context,
        chosen: to.to_string(),
    });

    writeln!(out, "{}", result.url)?;
    Ok(())
}

/// `check`: parse and validate a manifest file.
pub async fn check(path: &Path, out: &mut dyn Write) -> CliResult<()> {
    let body = FileManifestSource::new(path)
        .fetch(&path.display().to_string())
        .await?;
    let manifest = VersionManifest::from_json(&body)?;
    manifest.validate()?;

    for entry in manifest.entries() {
        let mut line = format!("{} \"{}\"", entry.version, entry.title);
        if !entry.aliases.is_empty() {
            line.push_str(&format!(" aliases: {}", entry.aliases.join(", ")));
        }
        if entry.is_hidden() {
            line.push_str(" (hidden)");
        }
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{} versions OK", manifest.len())?;
    Ok(())
}
