//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the selector to its host:
//! - `mock` - In-memory ports for tests
//! - `http` - `reqwest` manifest source (native)
//! - `file` - Local `versions.json` source (native)
//! - `browser` - DOM, `window.fetch` and `window.location` (feature `wasm`)

pub mod mock;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod browser;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileManifestSource;
#[cfg(not(target_arch = "wasm32"))]
pub use http::ReqwestManifestSource;
