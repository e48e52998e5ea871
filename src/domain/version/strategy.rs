//! URL and redirect strategies.
//!
//! Sites publish their versions under different URL layouts. Instead of one
//! script per layout, a deployment picks one [`UrlStrategy`] to find the
//! current version and one [`RedirectStrategy`] to build the target URL.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::path::expand_path;
use super::token::TOKEN_ALTERNATIVES;
use super::{PageContext, VersionToken};
use crate::domain::foundation::SelectorError;

/// A token delimited by `/` (or the start) on the left and by `/`, `?`, `#`
/// or the end on the right. Keeps hosts like `dev.example.com` from matching.
static DELIMITED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?:^|/)({})(?:[/?#]|$)", TOKEN_ALTERNATIVES))
        .expect("delimited token pattern must compile")
});

/// Default segment index for `/<site>/<version>/...` layouts.
pub const DEFAULT_SEGMENT_INDEX: usize = 2;

/// How the current version token is found in the page URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlStrategy {
    /// Token is the path segment at `index` of the page's directory
    /// (segment 0 is the empty string before the leading `/`).
    PathSegment { index: usize },

    /// Token is the first delimited token match anywhere in the URL.
    #[default]
    RegexOnFullUrl,
}

impl UrlStrategy {
    /// Derives the page context from a full URL or a path-only URL.
    ///
    /// # Errors
    ///
    /// Returns `VersionNotFound` when no version token can be located.
    pub fn resolve(&self, url: &str) -> Result<PageContext, SelectorError> {
        let span = match self {
            UrlStrategy::PathSegment { index } => path_segment_span(url, *index),
            UrlStrategy::RegexOnFullUrl => DELIMITED_TOKEN
                .captures(url)
                .and_then(|caps| caps.get(1))
                .map(|m| (m.start(), m.end())),
        };

        let (start, end) = span.ok_or_else(|| SelectorError::version_not_found(url))?;
        let token = VersionToken::parse(&url[start..end])
            .ok_or_else(|| SelectorError::version_not_found(url))?;

        let rest = &url[end..];
        let doc_path = rest.strip_prefix('/').unwrap_or(rest);

        Ok(PageContext::new(url, &url[..start], token, doc_path))
    }
}

/// Byte range of the path part of a URL, excluding query and fragment.
fn path_bounds(url: &str) -> (usize, usize) {
    let start = match url.find("://") {
        Some(scheme_end) => {
            let authority = scheme_end + 3;
            url[authority..]
                .find('/')
                .map(|i| authority + i)
                .unwrap_or(url.len())
        }
        None => 0,
    };
    let end = url[start..]
        .find(|c: char| c == '?' || c == '#')
        .map(|i| start + i)
        .unwrap_or(url.len());
    (start, end)
}

/// Byte range of a version token at segment `index` of the page directory.
fn path_segment_span(url: &str, index: usize) -> Option<(usize, usize)> {
    let (path_start, path_end) = path_bounds(url);
    // The directory is always a prefix of the path, so offsets carry over.
    let dir = expand_path(&url[path_start..path_end], ".").ok()?;

    let mut offset = path_start;
    for (i, segment) in dir.split('/').enumerate() {
        if i == index {
            if !VersionToken::is_token(segment) {
                return None;
            }
            return Some((offset, offset + segment.len()));
        }
        offset += segment.len() + 1;
    }
    None
}

/// How the redirect URL is built when another version is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectStrategy {
    /// `base_root + chosen + "/" + doc_path`
    #[default]
    PreservePath,

    /// `base_root + chosen + "/"`
    VersionRootOnly,

    /// Page URL with the first occurrence of the current token replaced.
    /// Breaks when the token text also appears earlier in the URL.
    SubstituteToken,
}

impl RedirectStrategy {
    /// Builds the URL to navigate to for the chosen version.
    pub fn redirect_url(&self, context: &PageContext, chosen: &str) -> String {
        match self {
            RedirectStrategy::PreservePath => {
                format!("{}{}/{}", context.base_root(), chosen, context.doc_path())
            }
            RedirectStrategy::VersionRootOnly => format!("{}{}/", context.base_root(), chosen),
            RedirectStrategy::SubstituteToken => {
                context
                    .page_url()
                    .replacen(context.current_token().as_str(), chosen, 1)
            }
        }
    }
}
