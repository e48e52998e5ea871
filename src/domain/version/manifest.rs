//! The version manifest (`versions.json`).
//!
//! Lookup is first-match in manifest order. A manifest that breaks the
//! uniqueness invariants still resolves deterministically; callers that want
//! to refuse such manifests run [`VersionManifest::validate`] first.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{SelectOption, VersionEntry};
use crate::domain::foundation::{ManifestError, SelectorError};

/// Ordered list of documentation versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionManifest(Vec<VersionEntry>);

impl VersionManifest {
    pub fn new(entries: Vec<VersionEntry>) -> Self {
        Self(entries)
    }

    /// Parses the JSON array served as `versions.json`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finds the entry owning a token, by version or alias.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVersion` when no entry answers to the token.
    pub fn resolve(&self, token: &str) -> Result<&VersionEntry, SelectorError> {
        self.0
            .iter()
            .find(|entry| entry.answers_to(token))
            .ok_or_else(|| SelectorError::unknown_version(token))
    }

    /// Builds the dropdown options for a reader on `real_version`.
    ///
    /// Hidden entries are dropped unless they are the version being viewed.
    /// Manifest order is preserved and only `real_version` is selected.
    pub fn visible_options(&self, real_version: &str) -> Vec<SelectOption> {
        self.0
            .iter()
            .filter(|entry| entry.version == real_version || !entry.is_hidden())
            .map(|entry| {
                SelectOption::new(
                    entry.title.clone(),
                    entry.version.clone(),
                    entry.version == real_version,
                )
            })
            .collect()
    }

    /// Checks that versions are unique and no alias collides with another
    /// entry's version or aliases.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for entry in &self.0 {
            if owners.insert(&entry.version, &entry.version).is_some() {
                return Err(ManifestError::DuplicateVersion {
                    version: entry.version.clone(),
                });
            }
        }

        for entry in &self.0 {
            for alias in &entry.aliases {
                match owners.get(alias.as_str()) {
                    Some(owner) if *owner != entry.version => {
                        return Err(ManifestError::AliasCollision {
                            alias: alias.clone(),
                            owner: entry.version.clone(),
                            other: owner.to_string(),
                        });
                    }
                    _ => {
                        owners.insert(alias, &entry.version);
                    }
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<VersionEntry>> for VersionManifest {
    fn from(entries: Vec<VersionEntry>) -> Self {
        Self(entries)
    }
}
