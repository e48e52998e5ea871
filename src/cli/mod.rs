//! CLI module for doc-version-select
//!
//! Runs the selector flow outside a browser:
//! - resolve: Split a page URL into its version parts
//! - options: List the dropdown a page would show
//! - redirect: Compute the redirect for a chosen version
//! - check: Validate a versions.json file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, StrategyArgs};
pub use commands::{check, manifest_source, options, redirect, resolve};
pub use errors::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

use crate::config::SelectorConfig;

/// Parse arguments, load configuration and run the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let mut config = SelectorConfig::load()?;
    cli.strategy.apply(&mut config);
    config.validate()?;

    init_tracing(&config.log_level);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut stdout = std::io::stdout();

    runtime.block_on(async {
        match cli.command {
            Command::Resolve { url } => resolve(&config, &url, &mut stdout),
            Command::Options { url, manifest } => {
                let source = manifest_source(&config, manifest.as_deref())?;
                options(&config, &url, source, &mut stdout).await
            }
            Command::Redirect { url, to, manifest } => {
                let source = manifest_source(&config, manifest.as_deref())?;
                redirect(&config, &url, &to, source, &mut stdout).await
            }
            Command::Check { manifest } => check(&manifest, &mut stdout).await,
        }
    })
}

/// Logs go to stderr so command output stays clean. `RUST_LOG` wins over the
/// configured filter.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
