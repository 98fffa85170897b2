//! Configuration for the word trie.

/// Default sentinel key of the trie's root node.
pub const DEFAULT_ROOT_KEY: char = '*';

/// Default upper bound on the number of characters in a stored word.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 1024;

/// Configuration options for a [`WordTrie`](super::WordTrie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTrieConfig {
    /// Key of the root node; never part of a word
    root_key: char,

    /// Whether words and queries are compared as given or lower-cased first
    case_sensitive: bool,

    /// Maximum number of characters accepted by `add`
    max_word_length: usize,
}

impl WordTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - root_key: `*`
    /// - case_sensitive: true
    /// - max_word_length: 1024
    pub fn new() -> Self {
        Self {
            root_key: DEFAULT_ROOT_KEY,
            case_sensitive: true,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// Set the sentinel key used for the root node.
    pub fn with_root_key(mut self, root_key: char) -> Self {
        self.root_key = root_key;
        self
    }

    /// Set whether lookups distinguish upper and lower case.
    ///
    /// When disabled, words are stored and queried in lower case.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum number of characters in a stored word.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        if max_word_length == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_length = max_word_length;
        self
    }

    /// Get the root sentinel key
    pub fn root_key(&self) -> char {
        self.root_key
    }

    /// Get whether lookups are case sensitive
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Get the maximum word length
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }
}

impl Default for WordTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WordTrieConfig::default();
        assert_eq!(config.root_key(), '*');
        assert!(config.case_sensitive());
        assert_eq!(config.max_word_length(), 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = WordTrieConfig::new()
            .with_root_key('#')
            .with_case_sensitive(false)
            .with_max_word_length(32);

        assert_eq!(config.root_key(), '#');
        assert!(!config.case_sensitive());
        assert_eq!(config.max_word_length(), 32);
    }

    #[test]
    #[should_panic(expected = "Maximum word length must be greater than 0")]
    fn test_invalid_max_word_length() {
        let _config = WordTrieConfig::new().with_max_word_length(0);
    }
}
