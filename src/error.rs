//! Crate-wide error types.
//!
//! Each error class gets its own variant so callers can tell a stale edit
//! session (`NotInText`) apart from bad input or out-of-range indices.

use thiserror::Error;

/// Errors raised by segmentation, location, and collection operations.
#[derive(Error, Debug)]
pub enum TextError {
    /// Input text exceeds the configured size cap. Raised before any
    /// scanning work begins.
    #[error("text is {size} bytes, which exceeds the {limit}-byte maximum")]
    TextTooLarge { size: usize, limit: usize },

    /// Sentence boundary patterns failed to compile.
    #[error("failed to compile sentence boundary patterns: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),

    /// I/O failure while loading an abbreviation file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Word maximum below the smallest meaningful threshold.
    #[error("word maximum must be at least 1")]
    InvalidWordMax,

    /// An empty or whitespace-only string where content is required.
    #[error("empty string passed for '{name}'")]
    EmptyInput { name: &'static str },

    /// A needle that does not occur in the haystack at or after the search
    /// cursor. For sentence lookups this signals that the caller's sentence
    /// list no longer matches the caller's text.
    #[error("substring '{needle}' not found in text after position {from}")]
    NotInText { needle: String, from: usize },

    /// Merge or split attempted on an empty sentence list.
    #[error("{operation} cannot be performed on an empty sentence list")]
    EmptyCollection { operation: &'static str },

    /// Sentence index outside `[0, len)`.
    #[error("sentence index {index} out of bounds for list of {len} sentences")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl TextError {
    /// Build a `NotInText` error, truncating long needles so error messages
    /// stay readable for multi-kilobyte sentences.
    pub(crate) fn not_in_text(needle: &str, from: usize) -> Self {
        const EXCERPT_CHARS: usize = 60;
        let mut excerpt: String = needle.chars().take(EXCERPT_CHARS).collect();
        if needle.chars().count() > EXCERPT_CHARS {
            excerpt.push_str("...");
        }
        TextError::NotInText {
            needle: excerpt,
            from,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TextError>;
