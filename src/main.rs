//! doc-version-select CLI entry point
//!
//! Dispatches to the CLI module, prints errors to stderr and exits with
//! non-zero on failure.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = doc_version_select::cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
