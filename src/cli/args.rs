//! CLI argument definitions using clap
//!
//! Commands:
//! - doc-version-select resolve --url <URL>
//! - doc-version-select options --url <URL> [--manifest <FILE>]
//! - doc-version-select redirect --url <URL> --to <VERSION> [--manifest <FILE>]
//! - doc-version-select check --manifest <FILE>

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{SelectorConfig, UrlStrategyKind};
use crate::domain::version::RedirectStrategy;

/// Version picker diagnostics for versioned documentation sites
#[derive(Parser, Debug)]
#[command(name = "doc-version-select")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub strategy: StrategyArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the base root, version token and doc path of a page URL
    Resolve {
        /// Page URL or path
        #[arg(long)]
        url: String,
    },

    /// List the versions the dropdown offers on a page
    Options {
        /// Page URL or path
        #[arg(long)]
        url: String,

        /// Read versions.json from this file instead of the site
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Print the URL a reader is sent to when choosing a version
    Redirect {
        /// Page URL or path
        #[arg(long)]
        url: String,

        /// Version chosen in the dropdown
        #[arg(long)]
        to: String,

        /// Read versions.json from this file instead of the site
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Validate a versions.json file
    Check {
        /// Path to versions.json
        #[arg(long)]
        manifest: PathBuf,
    },
}

/// Overrides for the configured strategies
#[derive(Args, Debug, Default)]
pub struct StrategyArgs {
    /// How the version is found in the page URL
    #[arg(long, global = true, value_enum)]
    pub url_strategy: Option<UrlStrategyArg>,

    /// Directory segment holding the version (path-segment only)
    #[arg(long, global = true)]
    pub segment_index: Option<usize>,

    /// How the redirect URL is built
    #[arg(long, global = true, value_enum)]
    pub redirect: Option<RedirectArg>,

    /// Refuse manifests with duplicate versions or colliding aliases
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlStrategyArg {
    PathSegment,
    RegexOnFullUrl,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectArg {
    PreservePath,
    VersionRootOnly,
    SubstituteToken,
}

impl StrategyArgs {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut SelectorConfig) {
        if let Some(kind) = self.url_strategy {
            config.url_strategy = match kind {
                UrlStrategyArg::PathSegment => UrlStrategyKind::PathSegment,
                UrlStrategyArg::RegexOnFullUrl => UrlStrategyKind::RegexOnFullUrl,
            };
        }
        if let Some(index) = self.segment_index {
            config.segment_index = index;
        }
        if let Some(redirect) = self.redirect {
            config.redirect_strategy = match redirect {
                RedirectArg::PreservePath => RedirectStrategy::PreservePath,
                RedirectArg::VersionRootOnly => RedirectStrategy::VersionRootOnly,
                RedirectArg::SubstituteToken => RedirectStrategy::SubstituteToken,
            };
        }
        if self.strict {
            config.strict_manifest = true;
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::version::UrlStrategy;

    #[test]
    fn test_parse_redirect_command() {
        let cli = Cli::try_parse_from([
            "doc-version-select",
            "redirect",
            "--url",
            "https://example.org/docs/dev/",
            "--to",
            "1.0.0",
            "--redirect",
            "version-root-only",
        ])
        .unwrap();

        match cli.command {
            Command::Redirect { url, to, manifest } => {
                assert_eq!(url, "https://example.org/docs/dev/");
                assert_eq!(to, "1.0.0");
                assert!(manifest.is_none());
            }
            other => panic!("Expected redirect command, got {:?}", other),
        }
        assert_eq!(cli.strategy.redirect, Some(RedirectArg::VersionRootOnly));
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = StrategyArgs {
            url_strategy: Some(UrlStrategyArg::PathSegment),
            segment_index: Some(1),
            redirect: Some(RedirectArg::SubstituteToken),
            strict: true,
        };
        let mut config = SelectorConfig::default();
        args.apply(&mut config);

        assert_eq!(config.url_strategy(), UrlStrategy::PathSegment { index: 1 });
        assert_eq!(config.redirect_strategy, RedirectStrategy::SubstituteToken);
        assert!(config.strict_manifest);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut config = SelectorConfig::default();
        StrategyArgs::default().apply(&mut config);
        assert_eq!(config, SelectorConfig::default());
    }
}
