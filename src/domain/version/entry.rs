//! Manifest entries as they appear in `versions.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One documentation version listed in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Canonical id, e.g. "1.2.3" or "dev"
    pub version: String,

    /// Display label
    pub title: String,

    /// Alternate ids resolving to this entry
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<VersionProperties>,
}

/// Optional per-version metadata.
///
/// Only `hidden` is interpreted; other keys written by the publishing tool
/// are kept so a manifest survives a round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionProperties {
    #[serde(default)]
    pub hidden: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VersionEntry {
    /// Creates a visible entry without aliases.
    pub fn new(version: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: title.into(),
            aliases: Vec::new(),
            properties: None,
        }
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Marks the entry hidden.
    pub fn hidden(mut self) -> Self {
        self.properties.get_or_insert_with(Default::default).hidden = true;
        self
    }

    /// Returns true if the token is this entry's version or one of its aliases.
    pub fn answers_to(&self, token: &str) -> bool {
        self.version == token || self.aliases.iter().any(|a| a == token)
    }

    /// Returns true if the entry is marked hidden.
    pub fn is_hidden(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| p.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_entry() {
        let entry: VersionEntry =
            serde_json::from_str(r#"{"version": "dev", "title": "Dev", "aliases": []}"#).unwrap();
        assert_eq!(entry, VersionEntry::new("dev", "Dev"));
        assert!(!entry.is_hidden());
    }

    #[test]
    fn missing_aliases_default_to_empty() {
        let entry: VersionEntry =
            serde_json::from_str(r#"{"version": "0.1.0", "title": "0.1"}"#).unwrap();
        assert!(entry.aliases.is_empty());
    }

    #[test]
    fn properties_without_hidden_are_visible() {
        let entry: VersionEntry = serde_json::from_str(
            r#"{"version": "0.1.0", "title": "0.1", "aliases": [], "properties": {}}"#,
        )
        .unwrap();
        assert!(!entry.is_hidden());
    }

    #[test]
    fn hidden_flag_is_read() {
        let entry: VersionEntry = serde_json::from_str(
            r#"{"version": "0.1.0", "title": "0.1", "aliases": [], "properties": {"hidden": true}}"#,
        )
        .unwrap();
        assert!(entry.is_hidden());
    }

    #[test]
    fn unknown_properties_survive_round_trip() {
        let json = r#"{"version":"0.1.0","title":"0.1","aliases":[],"properties":{"hidden":false,"eol":"2024-01-01"}}"#;
        let entry: VersionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.properties.as_ref().unwrap().extra.get("eol"),
            Some(&Value::String("2024-01-01".into()))
        );

        let back: Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["properties"]["eol"], "2024-01-01");
    }

    #[test]
    fn answers_to_version_and_aliases() {
        let entry = VersionEntry::new("1.0.0", "1.0").with_alias("stable");
        assert!(entry.answers_to("1.0.0"));
        assert!(entry.answers_to("stable"));
        assert!(!entry.answers_to("dev"));
    }
}
