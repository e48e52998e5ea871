//! HTTP adapters.

mod reqwest_manifest_source;

pub use reqwest_manifest_source::ReqwestManifestSource;
