//! Page configuration: storage keys and text defaults

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONTENT_KEY: &str = "custom_text_content";
pub const DEFAULT_TITLE_KEY: &str = "custom_text_title";
pub const DEFAULT_TITLE: &str = "Your Custom Text Page";
pub const DEFAULT_FALLBACK_FILE_NAME: &str = "content";

/// Settings for a page builder instance.
///
/// Every field has a default, so a host may pass a partial JSON object
/// such as `{"titleKey": "my_app_title"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Storage key holding the body content
    pub content_key: String,
    /// Storage key holding the page title
    pub title_key: String,
    /// Title used when nothing is stored
    pub default_title: String,
    /// Download file stem used when the title is blank
    pub fallback_file_name: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            content_key: DEFAULT_CONTENT_KEY.to_string(),
            title_key: DEFAULT_TITLE_KEY.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            fallback_file_name: DEFAULT_FALLBACK_FILE_NAME.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the rest of the crate relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_key == self.title_key {
            return Err(ConfigError::DuplicateStorageKey(self.content_key.clone()));
        }
        if self.fallback_file_name.trim().is_empty() {
            return Err(ConfigError::BlankFallbackName);
        }
        Ok(())
    }
}
