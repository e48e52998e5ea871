//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod selector;

pub use selector::{
    InitializeSelectorCommand, InitializeSelectorHandler, ResolveVersionsHandler,
    ResolveVersionsQuery, ResolvedVersions,
    SelectVersionCommand, SelectVersionHandler, SelectVersionResult, VersionSelector,
};
