//! Page element configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Ids and classes of the page elements the selector relies on
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DomConfig {
    /// Id of the empty container the dropdown is appended to
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Id of the site title the container is placed after
    #[serde(default = "default_title_id")]
    pub title_id: String,

    /// Class marking the theme's header title wrapper
    #[serde(default = "default_header_title_class")]
    pub header_title_class: String,

    /// Class added to the select control
    #[serde(default = "default_select_class")]
    pub select_class: String,
}

impl DomConfig {
    /// Validate element configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.container_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DOM__CONTAINER_ID"));
        }
        if self.title_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DOM__TITLE_ID"));
        }
        Ok(())
    }
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            title_id: default_title_id(),
            header_title_class: default_header_title_class(),
            select_class: default_select_class(),
        }
    }
}

fn default_container_id() -> String {
    "version-selector".to_string()
}

fn default_title_id() -> String {
    "site-title".to_string()
}

fn default_header_title_class() -> String {
    "md-header__title".to_string()
}

fn default_select_class() -> String {
    "form-control".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_config_defaults() {
        let config = DomConfig::default();
        assert_eq!(config.container_id, "version-selector");
        assert_eq!(config.title_id, "site-title");
        assert_eq!(config.header_title_class, "md-header__title");
        assert_eq!(config.select_class, "form-control");
    }

    #[test]
    fn test_validation_empty_container() {
        let config = DomConfig {
            container_id: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("DOM__CONTAINER_ID"))
        );
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let config: DomConfig = serde_json::from_str(r#"{"title_id": "logo"}"#).unwrap();
        assert_eq!(config.title_id, "logo");
        assert_eq!(config.container_id, "version-selector");
    }
}
