//! `word_list` — Module to read the ordered word list a crossword is built from
//!
//! A word list can come from a file (native builds) or from an in-memory string (the
//! browser hands us text it fetched or read through the File API, since WASM cannot touch
//! the filesystem).
//!
//! The format:
//! - One entry per line, either `word` or `word;tip`.
//! - Leading/trailing whitespace around the line, the word and the tip is trimmed.
//! - Empty lines and lines starting with `#` are skipped.
//! - An empty tip (`word;`) is the same as no tip.
//!
//! Unlike a dictionary, order is significant here: an entry's position is its clue number,
//! and the placement engine tries words in exactly this order. So we do NOT sort,
//! deduplicate, or change case; the words are placed as written.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use crate::errors::InputError;

const COMMENT_PREFIX: char = '#';
const TIP_SEPARATOR: char = ';';

/// One line of a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    /// The hint shown next to the clue number, if the list provides one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tip: Option<String>,
}

/// Parsed word list, in clue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub entries: Vec<WordEntry>,
}

impl WordList {
    /// Build a list from bare words, in order, without tips.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = words
            .into_iter()
            .map(|w| WordEntry { word: w.into(), tip: None })
            .collect();
        Self { entries }
    }

    /// Parse a word list from an in-memory string.
    ///
    /// This is **WASM-safe**: no filesystem access.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let entries = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                    return None;
                }
                // split on the first ';' only, so tips may contain semicolons
                let entry = match line.split_once(TIP_SEPARATOR) {
                    Some((word, tip)) => {
                        let tip = tip.trim();
                        WordEntry {
                            word: word.trim().to_string(),
                            tip: (!tip.is_empty()).then(|| tip.to_string()),
                        }
                    }
                    None => WordEntry { word: line.to_string(), tip: None },
                };
                Some(entry)
            })
            .collect();

        WordList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ReadFailure`] if the file cannot be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, InputError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| InputError::ReadFailure {
            path: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse_from_str(&data))
    }

    /// The words alone, in clue order, ready for [`crate::generate`].
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `other`'s entries after this list's, keeping both orders.
    pub fn extend(&mut self, other: WordList) {
        self.entries.extend(other.entries);
    }
}
