//! Record store configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::KumuTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_name_length`; removal recurses once per character.
const MAX_NAME_LENGTH_LIMIT: usize = 1024;

/// Record store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Whether student names are case-sensitive
    pub case_sensitive: bool,

    /// Maximum name length in characters
    pub max_name_length: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        let defaults = KumuTrieConfig::default();
        Self {
            case_sensitive: defaults.case_sensitive,
            max_name_length: defaults.max_name_length,
        }
    }
}

impl From<&TrieSettings> for KumuTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        Self {
            case_sensitive: settings.case_sensitive,
            max_name_length: settings.max_name_length,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_name_length == 0 || self.max_name_length > MAX_NAME_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_name_length".to_string(),
                message: format!("must be between 1 and {MAX_NAME_LENGTH_LIMIT}"),
            });
        }
        Ok(())
    }
}
