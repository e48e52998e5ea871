//! Version token value object.
//!
//! A version token is the URL segment naming a documentation build:
//! a release (`1.2.3`, `1.2.3-rc1`, `1.2.3rc1`) or one of the
//! moving tokens `dev` and `stable`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unanchored token alternatives, shared by the exact and the URL-scanning
/// patterns.
pub(crate) const TOKEN_ALTERNATIVES: &str = r"\d+\.\d+\.\d+(?:-?rc\d+)?|dev|stable";

static EXACT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", TOKEN_ALTERNATIVES)).expect("token pattern must compile")
});

/// A validated version token taken from a page URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionToken(String);

impl VersionToken {
    /// Parses a token, returning `None` if the text is not a version token.
    pub fn parse(text: &str) -> Option<Self> {
        if Self::is_token(text) {
            Some(Self(text.to_string()))
        } else {
            None
        }
    }

    /// Returns true if the whole text is a version token.
    pub fn is_token(text: &str) -> bool {
        EXACT_TOKEN.is_match(text)
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `dev` and `stable`, which are normally aliases.
    pub fn is_moving(&self) -> bool {
        self.0 == "dev" || self.0 == "stable"
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
