//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the selector and the hosting page. Adapters implement these ports.
//!
//! - `ManifestSource` - Reads `versions.json` (the only I/O boundary)
//! - `HeaderDom` - Container, title and select control in the page header
//! - `Navigator` - Full-page redirect

mod header_dom;
mod manifest_source;
mod navigator;

pub use header_dom::{ChangeHandler, HeaderDom};
pub use manifest_source::{FetchError, ManifestSource};
pub use navigator::Navigator;
