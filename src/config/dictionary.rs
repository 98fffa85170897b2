//! Dictionary configuration module.
//!
//! Describes where the word list comes from and how its lines are read.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path of the word list, one word per line (None for no dictionary)
    pub path: Option<PathBuf>,

    /// Lines starting with this prefix are skipped
    pub comment_prefix: String,

    /// Whether to strip surrounding whitespace from each line
    pub trim: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            comment_prefix: "#".to_string(),
            trim: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.comment_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty".to_string(),
            ));
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
