//! Dictionary loading.
//!
//! Reads a word list, one word per line, into a [`WordTrie`]. Blank lines and
//! comment lines are skipped; words the trie refuses for being too long are
//! counted and logged, and do not stop the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::word_trie::{WordTrie, WordTrieError};
use crate::error::LexiResult;

/// How lines of a word list are interpreted.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    comment_prefix: String,
    trim: bool,
}

impl LoadOptions {
    /// Creates options with `#` comments and whitespace trimming.
    pub fn new() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            trim: true,
        }
    }

    /// Set the prefix that marks a comment line.
    pub fn with_comment_prefix<S: Into<String>>(mut self, comment_prefix: S) -> Self {
        let comment_prefix = comment_prefix.into();
        assert!(!comment_prefix.is_empty(), "Comment prefix must not be empty");
        self.comment_prefix = comment_prefix;
        self
    }

    /// Set whether surrounding whitespace is stripped from each line.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Get the comment prefix
    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    /// Get whether lines are trimmed
    pub fn trim(&self) -> bool {
        self.trim
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DictionaryConfig> for LoadOptions {
    fn from(config: &DictionaryConfig) -> Self {
        Self {
            comment_prefix: config.comment_prefix.clone(),
            trim: config.trim,
        }
    }
}

/// Counts of what happened to each line of a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Words that were not stored before
    pub added: usize,
    /// Words that were already stored
    pub duplicates: usize,
    /// Words refused by the trie and lines that are not valid UTF-8
    pub rejected: usize,
    /// Blank and comment lines
    pub skipped: usize,
}

impl LoadReport {
    /// Number of lines that held a word, whatever happened to it.
    pub fn words_seen(&self) -> usize {
        self.added + self.duplicates + self.rejected
    }
}

/// Loads every word of `reader` into `trie`.
///
/// Lines that are not valid UTF-8 are counted as rejected and the load goes on.
///
/// # Errors
///
/// Returns `LexiError::Io` if the reader fails; words read before the failure
/// stay in the trie.
pub fn load_reader<R: BufRead>(
    trie: &mut WordTrie,
    mut reader: R,
    options: &LoadOptions,
) -> LexiResult<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = line_number, error = %e, "Skipping line that is not valid UTF-8");
                report.rejected += 1;
                continue;
            }
        };
        let word = if options.trim { line.trim() } else { line };

        if word.is_empty() || word.starts_with(options.comment_prefix.as_str()) {
            report.skipped += 1;
            continue;
        }

        match trie.add(word) {
            Ok(true) => report.added += 1,
            Ok(false) => report.duplicates += 1,
            Err(WordTrieError::WordTooLong { length, max_length }) => {
                warn!(line = line_number, length, max_length, "Skipping word that is too long");
                report.rejected += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    debug!(?report, "Loaded word list");
    Ok(report)
}

/// Loads the word list at `path` into `trie`.
///
/// # Errors
///
/// Returns `LexiError::Io` if the file cannot be opened or read.
pub fn load_file<P: AsRef<Path>>(
    trie: &mut WordTrie,
    path: P,
    options: &LoadOptions,
) -> LexiResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_reader(trie, BufReader::new(file), options)?;

    info!(
        path = %path.display(),
        added = report.added,
        duplicates = report.duplicates,
        rejected = report.rejected,
        "Dictionary loaded"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::word_trie::WordTrieConfig;
    use crate::error::LexiError;
    use std::io::{Cursor, Read};

    #[test]
    fn test_load_reader_counts_lines() {
        let mut trie = WordTrie::new();
        let input = "# fruit\nhello\n\n  world  \nhello\n";

        let report = load_reader(&mut trie, Cursor::new(input), &LoadOptions::new()).unwrap();

        assert_eq!(
            report,
            LoadReport {
                added: 2,
                duplicates: 1,
                rejected: 0,
                skipped: 2,
            }
        );
        assert_eq!(report.words_seen(), 3);
        assert!(trie.contains("world"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_untrimmed_lines_keep_whitespace() {
        let mut trie = WordTrie::new();
        let options = LoadOptions::new().with_trim(false);

        load_reader(&mut trie, Cursor::new(" padded\n"), &options).unwrap();

        assert!(trie.contains(" padded"));
        assert!(!trie.contains("padded"));
    }

    #[test]
    fn test_custom_comment_prefix() {
        let mut trie = WordTrie::new();
        let options = LoadOptions::new().with_comment_prefix("//");

        let report = load_reader(&mut trie, Cursor::new("// note\n#tag\n"), &options).unwrap();

        assert_eq!(report.skipped, 1);
        assert!(trie.contains("#tag"));
    }

    #[test]
    fn test_long_words_are_rejected_not_fatal() {
        let mut trie = WordTrie::with_config(WordTrieConfig::new().with_max_word_length(3));

        let report =
            load_reader(&mut trie, Cursor::new("cat\nhorse\ndog\n"), &LoadOptions::new()).unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(trie.words(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_not_fatal() {
        let mut trie = WordTrie::new();
        let input: &[u8] = b"alpha\r\n\xff\xfe\nomega\n";

        let report = load_reader(&mut trie, Cursor::new(input), &LoadOptions::new()).unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(trie.words(), vec!["alpha", "omega"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut trie = WordTrie::new();
        let options = LoadOptions::new().with_trim(false);

        let report = load_reader(&mut trie, Cursor::new("first\r\nlast"), &options).unwrap();

        assert_eq!(report.added, 2);
        assert!(trie.contains("first"));
        assert!(trie.contains("last"));
    }

    #[test]
    fn test_read_error_aborts_load() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let mut trie = WordTrie::new();
        let result = load_reader(&mut trie, BufReader::new(FailingReader), &LoadOptions::new());

        assert!(matches!(result, Err(LexiError::Io(_))));
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut trie = WordTrie::new();

        let result = load_file(&mut trie, dir.path().join("absent.txt"), &LoadOptions::new());

        assert!(matches!(result, Err(LexiError::Io(_))));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "car\ncart\ncarbon\n").unwrap();

        let mut trie = WordTrie::new();
        let report = load_file(&mut trie, &path, &LoadOptions::new()).unwrap();

        assert_eq!(report.added, 3);
        assert_eq!(trie.words_with_prefix("car").unwrap(), vec!["car", "cart", "carbon"]);
    }

    #[test]
    fn test_options_from_config() {
        let config = DictionaryConfig {
            path: None,
            comment_prefix: ";".to_string(),
            trim: false,
        };

        let options = LoadOptions::from(&config);

        assert_eq!(options.comment_prefix(), ";");
        assert!(!options.trim());
    }

    #[test]
    #[should_panic(expected = "Comment prefix must not be empty")]
    fn test_empty_comment_prefix_panics() {
        let _ = LoadOptions::new().with_comment_prefix("");
    }
}
