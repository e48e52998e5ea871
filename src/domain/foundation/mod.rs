//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the version selector domain,
//! its ports and its adapters.

mod errors;

pub use errors::{ErrorCode, ManifestError, PathError, RenderError, SelectorError};
