use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::extract::ItemPolicy;

/// Project configuration loaded from `.swag2md.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Swag2mdConfig {
    /// Local path of the API description.
    pub input: Option<String>,
    /// Web URL of the API description; ignored when `input` is set.
    pub url: Option<String>,
    /// Output Markdown file; stdout when unset.
    pub output: Option<String>,
    pub lang: String,
    /// Custom term dictionary (JSON object of string pairs).
    pub terms: Option<String>,
    /// Abort on a malformed parameter instead of skipping it.
    pub strict: bool,
}

impl Default for Swag2mdConfig {
    fn default() -> Self {
        Self {
            input: None,
            url: None,
            output: None,
            lang: "en".to_string(),
            terms: None,
            strict: false,
        }
    }
}

impl Swag2mdConfig {
    pub fn item_policy(&self) -> ItemPolicy {
        if self.strict {
            ItemPolicy::Abort
        } else {
            ItemPolicy::Skip
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swag2md.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<Swag2mdConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: Swag2mdConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swag2md configuration
input: swagger.json       # local API description (JSON or YAML)
# url: https://petstore.swagger.io/v2/swagger.json
# output: API.md          # omit to print to stdout
lang: en                  # en | zh
# terms: terms.json       # custom section labels
strict: false             # abort on malformed parameters instead of skipping
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Swag2mdConfig::default();
        assert_eq!(config.input, None);
        assert_eq!(config.lang, "en");
        assert!(!config.strict);
        assert_eq!(config.item_policy(), ItemPolicy::Skip);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api/swagger.json
output: docs/API.md
lang: zh
terms: labels.json
strict: true
"#;
        let config: Swag2mdConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input.as_deref(), Some("api/swagger.json"));
        assert_eq!(config.output.as_deref(), Some("docs/API.md"));
        assert_eq!(config.lang, "zh");
        assert_eq!(config.terms.as_deref(), Some("labels.json"));
        assert_eq!(config.item_policy(), ItemPolicy::Abort);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Swag2mdConfig = serde_yaml_ng::from_str("url: https://example.com/api.json\n").unwrap();
        assert_eq!(config.url.as_deref(), Some("https://example.com/api.json"));
        // Defaults applied
        assert_eq!(config.lang, "en");
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_default_config_content_parses() {
        let config: Swag2mdConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input.as_deref(), Some("swagger.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let loaded = load_config(Path::new("definitely/not/here.yaml")).unwrap();
        assert!(loaded.is_none());
    }
}
