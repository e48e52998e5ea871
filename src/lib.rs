//! Doc Version Select - version picker for static documentation sites
//!
//! This crate finds which documentation version a page belongs to, reads the
//! site's `versions.json`, renders a dropdown of the available versions into
//! the page header and redirects to the same page under the version the
//! reader picks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
