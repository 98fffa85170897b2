//! Trie configuration module.
//!
//! Settings that shape how words are stored, converted into a
//! [`WordTrieConfig`] when the trie is built.

use super::{ConfigResult, Validate};
use crate::data_structures::word_trie::{WordTrieConfig, DEFAULT_MAX_WORD_LENGTH};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Whether lookups distinguish upper and lower case
    pub case_sensitive: bool,

    /// Maximum number of characters in a stored word
    pub max_word_length: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<&TrieSettings> for WordTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        WordTrieConfig::new()
            .with_case_sensitive(settings.case_sensitive)
            .with_max_word_length(settings.max_word_length)
    }
}
