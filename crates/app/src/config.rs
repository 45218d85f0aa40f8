//! Runtime configuration — names of the storage key, root attribute, toggle
//! control and media query.
//!
//! Every field has a default matching the stock page markup, so a page only
//! passes a JSON object when it deviates. Missing fields keep their default.

use serde::Deserialize;

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference record key.
    pub storage_key: String,
    /// Root element attribute carrying the theme marker.
    pub attribute: String,
    /// Element id of the toggle control.
    pub toggle_id: String,
    /// Media query whose match means "OS prefers dark".
    pub dark_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            dark_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] when a field is unusable.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an empty field or an attribute
    /// that is not a `data-*` attribute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("toggle_id", &self.toggle_id),
            ("dark_query", &self.dark_query),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if !self.attribute.starts_with("data-") || self.attribute.len() == "data-".len() {
            return Err(ConfigError::Validation(format!(
                "attribute {:?} must be a data-* attribute",
                self.attribute
            )));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse theme config")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid theme config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_stock_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.dark_query, "(prefers-color-scheme: dark)");
    }

    #[test]
    fn should_parse_empty_object_as_defaults() {
        let config = ThemeConfig::from_json("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn should_parse_partial_json_with_defaults() {
        let config = ThemeConfig::from_json(r#"{"storage_key": "site-theme"}"#).unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.toggle_id, "theme-toggle");
    }

    #[test]
    fn should_parse_full_json() {
        let json = r#"{
            "storage_key": "k",
            "attribute": "data-scheme",
            "toggle_id": "scheme-btn",
            "dark_query": "(prefers-color-scheme: dark) and (min-width: 0px)"
        }"#;
        let config = ThemeConfig::from_json(json).unwrap();
        assert_eq!(config.attribute, "data-scheme");
        assert_eq!(config.toggle_id, "scheme-btn");
    }

    #[test]
    fn should_report_parse_error_for_invalid_json() {
        let result = ThemeConfig::from_json("{{bad");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_reject_empty_field() {
        let result = ThemeConfig::from_json(r#"{"toggle_id": "  "}"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_non_data_attribute() {
        let mut config = ThemeConfig::default();
        config.attribute = "class".to_string();
        assert!(config.validate().is_err());
        config.attribute = "data-".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(ThemeConfig::default().validate().is_ok());
    }
}
