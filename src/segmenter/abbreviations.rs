// Abbreviation exception list for sentence boundary detection.
// A period inside a known abbreviation must not end a sentence, except at
// the very end of the text.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;

/// Default abbreviation set, one entry per line. The same flat format is
/// accepted by [`AbbreviationList::from_file`] for caller-supplied lists.
const DEFAULT_ABBREVIATIONS: &str = include_str!("../../data/abbreviations.txt");

/// Owned set of abbreviations the scanner should skip over.
///
/// Constructed once at startup and passed to the segmenter; there is no
/// process-wide global, so tests can swap in their own lists.
#[derive(Debug, Clone)]
pub struct AbbreviationList {
    entries: HashSet<String>,
}

impl AbbreviationList {
    /// Build a list from individual abbreviation strings.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a newline-delimited abbreviation list. Blank lines are skipped.
    pub fn from_lines(data: &str) -> Self {
        Self::new(data.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    /// Load a newline-delimited abbreviation file, once, at startup.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(&data))
    }

    /// Exact membership test for a single whitespace-delimited token.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// Whether any whitespace-delimited token of `span` is a known
    /// abbreviation. Tokens are matched whole, so "U.S." in the list does
    /// not match inside "U.S.S.R.".
    pub fn span_contains_abbreviation(&self, span: &str) -> bool {
        span.split_whitespace().any(|word| self.entries.contains(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AbbreviationList {
    fn default() -> Self {
        Self::from_lines(DEFAULT_ABBREVIATIONS)
    }
}
