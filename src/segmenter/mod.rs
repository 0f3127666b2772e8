// Rule-based sentence boundary scanner. A sentence ends at a terminating
// punctuation mark followed by whitespace, subject to the abbreviation and
// dialogue-quote exceptions below. No NLP, no models.

use regex_automata::{meta::Regex, Input};
use tracing::debug;

use crate::error::{Result, TextError};

pub mod abbreviations;
pub mod normalization;

pub use abbreviations::AbbreviationList;
pub use normalization::{normalize_quotes, normalize_quotes_into};

/// Upper bound on input size, checked before any scanning work begins.
pub const DEFAULT_MAX_TEXT_SIZE: usize = 100 * 1024 * 1024; // 100 MB

// Terminator pattern classes. The leaders (one-dot, two-dot, ellipsis) and
// the combined question/exclamation forms are treated no differently from
// their ASCII counterparts.
const PERIOD_CLASS: &str = r"[.\u{2024}\u{2025}\u{2026}]\s";
const QEXMARK_CLASS: &str = r"[?!\u{203C}\u{2047}\u{2048}\u{2049}]\s";
const QUOTE_CLASS: &str =
    r#"[.?!\u{2014}\u{2024}\u{2025}\u{2026}\u{203C}\u{2047}\u{2048}\u{2049}]"\s"#;

/// Heuristic sentence segmenter.
///
/// Owns its abbreviation exception list and its compiled terminator
/// patterns; construct once and reuse across calls.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: AbbreviationList,
    max_text_size: usize,
    period: Regex,
    qexmark: Regex,
    quote: Regex,
}

impl SentenceSegmenter {
    /// Create a segmenter with the given abbreviation list and the default
    /// size cap.
    pub fn new(abbreviations: AbbreviationList) -> Result<Self> {
        Ok(Self {
            abbreviations,
            max_text_size: DEFAULT_MAX_TEXT_SIZE,
            period: Regex::new(PERIOD_CLASS)?,
            qexmark: Regex::new(QEXMARK_CLASS)?,
            quote: Regex::new(QUOTE_CLASS)?,
        })
    }

    /// Create a segmenter with the embedded default abbreviation list.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(AbbreviationList::default())
    }

    /// Override the maximum accepted input size in bytes.
    pub fn with_max_text_size(mut self, max_text_size: usize) -> Self {
        self.max_text_size = max_text_size;
        self
    }

    pub fn abbreviations(&self) -> &AbbreviationList {
        &self.abbreviations
    }

    /// Split `text` into an ordered list of sentences.
    ///
    /// Each returned sentence keeps the whitespace between it and the end of
    /// the previous sentence, except the first, which starts at the first
    /// non-whitespace character of the text. Curly double quotes are
    /// normalized to straight quotes in the output. Trailing text with no
    /// recognized terminator is dropped — a documented limitation the
    /// caller's word-count cross-check relies on observing.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        if text.len() > self.max_text_size {
            return Err(TextError::TextTooLarge {
                size: text.len(),
                limit: self.max_text_size,
            });
        }

        let mut text = normalize_quotes(text);
        if text.is_empty() {
            return Ok(Vec::new());
        }
        // Sentinel space: a terminator is only recognized when followed by
        // whitespace, so the final sentence needs one more character.
        text.push(' ');

        let Some(first) = text.find(|c: char| !c.is_whitespace()) else {
            return Ok(Vec::new());
        };

        let mut sentences = Vec::new();
        let mut start = first;

        while start < text.len() - 1 {
            let Some(term) = self.first_terminator(&text, start) else {
                // No further terminator: the remaining text is discarded.
                debug!(
                    dropped_bytes = text.len() - 1 - start,
                    "no terminator in trailing text"
                );
                return Ok(sentences);
            };

            let mut end = term + char_len_at(&text, term);
            // A closing quote right after the terminator belongs to the
            // same sentence.
            if text[end..].starts_with('"') {
                end += 1;
            }

            sentences.push(text[start..end].to_string());
            start = end;
        }

        debug!(count = sentences.len(), "segmented text");
        Ok(sentences)
    }

    /// Byte offset of the first terminating punctuation mark at or after
    /// `start`, or `None` if the rest of the text holds no terminator.
    fn first_terminator(&self, text: &str, start: usize) -> Option<usize> {
        let mut pos_period = self
            .period
            .find(Input::new(text).range(start..))
            .map(|m| m.start());
        let pos_qexmark = self
            .qexmark
            .find(Input::new(text).range(start..))
            .map(|m| m.start());
        let pos_quote = self
            .quote
            .find(Input::new(text).range(start..))
            .map(|m| m.start());

        // Abbreviation exception: a period inside a known abbreviation is
        // not a terminator, unless nothing non-whitespace follows it. The
        // span checked runs from the current scan start through the period.
        let mut scan_from = start;
        while let Some(p) = pos_period {
            let after = p + char_len_at(text, p);
            let rest_blank = text[after..].trim().is_empty();
            if rest_blank
                || !self
                    .abbreviations
                    .span_contains_abbreviation(&text[scan_from..after])
            {
                break;
            }
            scan_from = after;
            pos_period = text[scan_from..].find(". ").map(|rel| scan_from + rel);
        }

        // Dialogue-quote exception: a lowercase character three places past
        // the terminator means mid-quote attribution ("...," she said), not
        // a sentence end.
        let pos_quote = pos_quote.filter(|&q| {
            !matches!(text[q..].chars().nth(3), Some(c) if c.is_lowercase())
        });

        [pos_period, pos_qexmark, pos_quote]
            .into_iter()
            .flatten()
            .min()
    }
}

/// UTF-8 length of the character starting at byte offset `i`.
fn char_len_at(text: &str, i: usize) -> usize {
    text[i..].chars().next().map(char::len_utf8).unwrap_or(1)
}
