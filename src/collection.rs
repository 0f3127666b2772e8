// Mutable sentence-list model over an original text. Supports merge and
// split corrections while keeping sentence contents locatable in the text,
// so per-sentence offsets can be re-derived after every edit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TextError};
use crate::locate::{byte_of_char, locate, offset_of_first_nonwhitespace, slice_chars};
use crate::segmenter::SentenceSegmenter;
use crate::words::words;

/// Threshold applied when the caller does not supply one.
pub const DEFAULT_WORD_MAX: usize = 20;

/// One sentence with the metadata the presentation layer needs for
/// highlighting: trimmed content, half-open char offsets into the text,
/// the over-threshold flag, and the whitespace that preceded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub content: String,
    pub start: usize,
    pub end: usize,
    pub over_threshold: bool,
    pub leading_whitespace: String,
}

/// A sentence exceeding the word threshold, with its location and count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongSentence {
    pub content: String,
    pub start: usize,
    pub end: usize,
    pub word_count: usize,
}

/// Ordered sentence list plus the text it was derived from.
///
/// Lifecycle is per-operation, not per-session: the caller constructs a
/// collection from its text, optionally replaces the parsed list with an
/// already-edited one, mutates, derives metadata, and discards. The
/// collection never assumes its own parse is authoritative.
pub struct SentenceCollection<'a> {
    segmenter: &'a SentenceSegmenter,
    text: String,
    sentences: Vec<String>,
}

impl<'a> SentenceCollection<'a> {
    /// Build a collection by parsing `text` with the given segmenter.
    pub fn new(segmenter: &'a SentenceSegmenter, text: &str) -> Result<Self> {
        let mut collection = Self {
            segmenter,
            text: String::new(),
            sentences: Vec::new(),
        };
        collection.parse(text)?;
        Ok(collection)
    }

    /// Re-parse from scratch, replacing both the stored text and the
    /// sentence list.
    pub fn parse(&mut self, text: &str) -> Result<&[String]> {
        let sentences = self.segmenter.segment(text)?;
        self.text = text.to_string();
        self.sentences = sentences;
        Ok(&self.sentences)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Overwrite the sentence list with a caller-supplied (possibly
    /// already edited) one.
    pub fn replace_sentences(&mut self, sentences: Vec<String>) {
        self.sentences = sentences;
    }

    /// Number of words in `sentence`.
    pub fn word_count(&self, sentence: &str) -> usize {
        words(sentence).len()
    }

    /// Whether `sentence` has more than `max_words` words. A zero
    /// threshold is rejected, never defaulted.
    pub fn is_over_threshold(&self, sentence: &str, max_words: usize) -> Result<bool> {
        if max_words < 1 {
            return Err(TextError::InvalidWordMax);
        }
        Ok(self.word_count(sentence) > max_words)
    }

    /// All sentences over `max_words`, each with its offsets in the text.
    ///
    /// The search cursor advances monotonically past each match, so a
    /// sentence that occurs twice in the text resolves to its own
    /// occurrence rather than the first.
    pub fn sentences_over_threshold(&self, max_words: usize) -> Result<Vec<LongSentence>> {
        let mut long_sentences = Vec::new();
        let mut cursor = 0;

        for sentence in &self.sentences {
            if self.is_over_threshold(sentence, max_words)? {
                let (start, end) = locate(sentence, &self.text, cursor)?;
                long_sentences.push(LongSentence {
                    content: sentence.clone(),
                    start,
                    end,
                    word_count: self.word_count(sentence),
                });
                cursor = end;
            }
        }

        Ok(long_sentences)
    }

    /// Merge the sentence at `index` with the one after it. Merging the
    /// last sentence is a no-op: there is nothing to merge it with.
    pub fn merge_next(&mut self, index: usize) -> Result<()> {
        if self.sentences.is_empty() {
            return Err(TextError::EmptyCollection { operation: "merge" });
        }
        let len = self.sentences.len();
        if index >= len {
            return Err(TextError::IndexOutOfBounds { index, len });
        }
        if index == len - 1 {
            return Ok(());
        }

        // Adjacent sentences already carry their own leading whitespace,
        // so plain concatenation reconstructs the original span.
        let next = self.sentences.remove(index + 1);
        self.sentences[index].push_str(&next);
        debug!(index, "merged sentence with successor");
        Ok(())
    }

    /// Split the sentence at `index` where `prefix` ends, inserting the
    /// remainder as a new sentence right after it.
    ///
    /// A whitespace-only `prefix` is a silent no-op, as is a split that
    /// would leave either part empty. A `prefix` that does not occur in
    /// the sentence propagates [`TextError::NotInText`].
    pub fn split_sentence(&mut self, index: usize, prefix: &str) -> Result<()> {
        if self.sentences.is_empty() {
            return Err(TextError::EmptyCollection { operation: "split" });
        }
        let len = self.sentences.len();
        if index >= len {
            return Err(TextError::IndexOutOfBounds { index, len });
        }

        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Ok(());
        }

        let sentence = &self.sentences[index];
        let (_, end) = locate(prefix, sentence, 0)?;
        let byte_end = byte_of_char(sentence, end).unwrap_or(sentence.len());
        let first_part = &sentence[..byte_end];
        let second_part = &sentence[byte_end..];

        if first_part.trim().is_empty() || second_part.trim().is_empty() {
            return Ok(());
        }

        let second_part = second_part.to_string();
        self.sentences[index].truncate(byte_end);
        self.sentences.insert(index + 1, second_part);
        debug!(index, "split sentence");
        Ok(())
    }

    /// Derive display metadata for every sentence: offsets into `text`,
    /// over-threshold flags, trimmed content, and leading whitespace.
    ///
    /// Offsets are found with a monotonically advancing cursor, and each
    /// sentence's start is moved forward past its own leading whitespace so
    /// highlighting begins at visible content. The final pass copies the
    /// whitespace gap before each sentence; a gap containing a newline gets
    /// one extra newline prepended (HTML rendering swallows the first).
    pub fn build_annotated_list(
        &self,
        text: &str,
        max_words: usize,
    ) -> Result<Vec<AnnotatedSentence>> {
        if self.sentences.is_empty() {
            return Ok(Vec::new());
        }

        let mut cursor = offset_of_first_nonwhitespace(text).unwrap_or(0);
        let mut entries = Vec::with_capacity(self.sentences.len());

        for sentence in &self.sentences {
            let (found_start, end) = locate(sentence, text, cursor)?;
            let start = found_start + offset_of_first_nonwhitespace(sentence).unwrap_or(0);
            let over_threshold = self.is_over_threshold(sentence, max_words)?;

            entries.push(AnnotatedSentence {
                content: sentence.trim().to_string(),
                start,
                end,
                over_threshold,
                leading_whitespace: String::new(),
            });
            cursor = end;
        }

        let mut expected_start = 0;
        for entry in &mut entries {
            if entry.start > expected_start {
                let mut gap = slice_chars(text, expected_start, entry.start).to_string();
                if gap.contains('\n') {
                    gap.insert(0, '\n');
                }
                entry.leading_whitespace = gap;
            }
            expected_start = entry.end;
        }

        Ok(entries)
    }
}
