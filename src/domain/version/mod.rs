//! Version module - documentation versions and how pages map onto them.
//!
//! - `VersionToken` - the version segment found in a page URL
//! - `VersionEntry`, `VersionManifest` - the `versions.json` document
//! - `PageContext` - base root, token and doc path of the current page
//! - `UrlStrategy`, `RedirectStrategy` - per-deployment URL layout choices
//! - `SelectOption` - one rendered dropdown option

mod context;
mod entry;
mod manifest;
mod option;
mod path;
mod strategy;
mod token;

pub use context::PageContext;
pub use entry::{VersionEntry, VersionProperties};
pub use manifest::VersionManifest;
pub use option::SelectOption;
pub use path::expand_path;
pub use strategy::{RedirectStrategy, UrlStrategy, DEFAULT_SEGMENT_INDEX};
pub use token::VersionToken;
