//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Resolution errors
    VersionNotFound,
    UnknownVersion,

    // Manifest errors
    ManifestUnavailable,

    // Page errors
    RenderFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::VersionNotFound => "VERSION_NOT_FOUND",
            ErrorCode::UnknownVersion => "UNKNOWN_VERSION",
            ErrorCode::ManifestUnavailable => "MANIFEST_UNAVAILABLE",
            ErrorCode::RenderFailed => "RENDER_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Terminal errors of the selector initialization flow.
///
/// None of these are retried or shown to the reader. The page stays usable,
/// only the dropdown is missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("No version token found in '{url}'")]
    VersionNotFound { url: String },

    #[error("Version manifest at '{url}' is unavailable: {reason}")]
    ManifestUnavailable { url: String, reason: String },

    #[error("Version '{token}' is not listed in the manifest")]
    UnknownVersion { token: String },

    #[error("Cannot render version selector: {0}")]
    Render(#[from] RenderError),
}

impl SelectorError {
    /// Creates a version-not-found error for a page URL.
    pub fn version_not_found(url: impl Into<String>) -> Self {
        SelectorError::VersionNotFound { url: url.into() }
    }

    /// Creates a manifest-unavailable error.
    pub fn manifest_unavailable(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        SelectorError::ManifestUnavailable {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an unknown-version error for a token.
    pub fn unknown_version(token: impl Into<String>) -> Self {
        SelectorError::UnknownVersion {
            token: token.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SelectorError::VersionNotFound { .. } => ErrorCode::VersionNotFound,
            SelectorError::ManifestUnavailable { .. } => ErrorCode::ManifestUnavailable,
            SelectorError::UnknownVersion { .. } => ErrorCode::UnknownVersion,
            SelectorError::Render(_) => ErrorCode::RenderFailed,
        }
    }
}

/// Violations of the manifest uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("Version '{version}' is listed more than once")]
    DuplicateVersion { version: String },

    #[error("Alias '{alias}' of version '{owner}' collides with version '{other}'")]
    AliasCollision {
        alias: String,
        owner: String,
        other: String,
    },
}

/// Errors from resolving a relative path against a page location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Path '{path}' climbs above the site root")]
    AboveRoot { path: String },
}

/// Errors raised by the header DOM while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Element '#{0}' is missing from the page")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::VersionNotFound), "VERSION_NOT_FOUND");
        assert_eq!(
            format!("{}", ErrorCode::ManifestUnavailable),
            "MANIFEST_UNAVAILABLE"
        );
        assert_eq!(format!("{}", ErrorCode::RenderFailed), "RENDER_FAILED");
    }

    #[test]
    fn selector_error_maps_to_code() {
        assert_eq!(
            SelectorError::version_not_found("https://x/").code(),
            ErrorCode::VersionNotFound
        );
        assert_eq!(
            SelectorError::manifest_unavailable("https://x/versions.json", "timeout").code(),
            ErrorCode::ManifestUnavailable
        );
        assert_eq!(
            SelectorError::unknown_version("9.9.9").code(),
            ErrorCode::UnknownVersion
        );
        assert_eq!(
            SelectorError::from(RenderError::MissingElement("site-title".into())).code(),
            ErrorCode::RenderFailed
        );
    }

    #[test]
    fn manifest_unavailable_displays_reason() {
        let err = SelectorError::manifest_unavailable("https://x/versions.json", "HTTP 404");
        assert_eq!(
            format!("{}", err),
            "Version manifest at 'https://x/versions.json' is unavailable: HTTP 404"
        );
    }

    #[test]
    fn render_error_names_missing_element() {
        let err = RenderError::MissingElement("version-selector".into());
        assert_eq!(
            format!("{}", err),
            "Element '#version-selector' is missing from the page"
        );
    }
}
