//! Page context derived from the current page URL.

use serde::Serialize;

use super::VersionToken;

/// Where the current page sits in the versioned site.
///
/// Computed once per page load and never mutated. For a well-formed page URL
/// `base_root + current_token + "/" + doc_path` gives the URL back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    page_url: String,
    base_root: String,
    current_token: VersionToken,
    doc_path: String,
}

impl PageContext {
    pub(crate) fn new(
        page_url: impl Into<String>,
        base_root: impl Into<String>,
        current_token: VersionToken,
        doc_path: impl Into<String>,
    ) -> Self {
        Self {
            page_url: page_url.into(),
            base_root: base_root.into(),
            current_token,
            doc_path: doc_path.into(),
        }
    }

    /// The URL the context was derived from.
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Site root, up to and including the separator before the token.
    pub fn base_root(&self) -> &str {
        &self.base_root
    }

    pub fn current_token(&self) -> &VersionToken {
        &self.current_token
    }

    /// Everything after the token and its trailing separator.
    pub fn doc_path(&self) -> &str {
        &self.doc_path
    }

    /// Location of the manifest next to the version directories.
    pub fn manifest_url(&self, manifest_file: &str) -> String {
        format!("{}{}", self.base_root, manifest_file)
    }

    /// Rebuilds the page URL from its parts.
    pub fn reconstruct(&self) -> String {
        format!("{}{}/{}", self.base_root, self.current_token, self.doc_path)
    }
}
