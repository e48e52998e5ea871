//! Domain layer containing version resolution and redirect logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error types
//! - `version` - Version tokens, the manifest, page context and strategies

pub mod foundation;
pub mod version;
