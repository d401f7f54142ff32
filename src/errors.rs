//! Error types for the surfaces around the placement engine, with error codes and help.
//!
//! The engine itself cannot fail: empty input is `None`, unplaceable words go to
//! overflow rows. Errors only arise while collecting input or writing output.
//!
//! # Error Codes
//!
//! - E001: `EmptyWordList` (No words to place)
//! - E002: `ReadFailure` (Word list file could not be read)
//! - E003: `Serialization` (Grid could not be written as JSON)
//!
//! # Examples
//!
//! ```
//! use crossgrid::errors::InputError;
//!
//! fn require_words(words: &[&str]) -> Result<(), InputError> {
//!     if words.is_empty() {
//!         return Err(InputError::EmptyWordList);
//!     }
//!     Ok(())
//! }
//!
//! let err = require_words(&[]).unwrap_err();
//! assert_eq!(err.code(), "E001");
//! assert!(err.display_detailed().contains("E001"));
//! ```

use std::io;

/// Failure while gathering words or emitting the grid.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No words to place")]
    EmptyWordList,

    #[error("Failed to read word list from '{path}': {reason}")]
    ReadFailure { path: String, reason: String },

    #[error("Failed to serialize grid: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<InputError> for io::Error {
    fn from(e: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyWordList => "E001",
            InputError::ReadFailure { .. } => "E002",
            InputError::Serialization(_) => "E003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::EmptyWordList => "No words to place",
            InputError::ReadFailure { .. } => "Word list file could not be read",
            InputError::Serialization(_) => "Grid could not be written as JSON",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::EmptyWordList => "Neither the command line nor the word list file supplied any words. A crossword needs at least one word; blank lines and '#' comment lines in a word list are ignored.",
            InputError::ReadFailure { .. } => "The word list path does not exist, is not readable, or is not valid UTF-8.",
            InputError::Serialization(_) => "The generated grid could not be converted to JSON. This is an internal error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyWordList => Some("Example: crossgrid react node express, or crossgrid -w words.txt"),
            InputError::ReadFailure { .. } => Some("Check the path; the file should hold one 'word' or 'word;tip' per line"),
            InputError::Serialization(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
