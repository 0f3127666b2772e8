// Substring location in character offsets, used to map sentences back to
// positions in the original text for highlighting.

use crate::error::{Result, TextError};
use crate::segmenter::normalization::normalize_quotes;

/// Find `needle` in `haystack` at or after character offset `search_from`.
///
/// Returns half-open character offsets `(start, end)`, so
/// `haystack[start..end]` (char-wise) is the matched region. Both strings
/// are quote-normalized before matching, because needles are typically
/// sentences produced by the segmenter, which normalizes its input.
/// Normalization replaces one char with one char, so the returned offsets
/// are valid against the raw haystack as well.
///
/// Errors: [`TextError::EmptyInput`] for a whitespace-only needle or
/// haystack, [`TextError::NotInText`] when the needle does not occur at or
/// after the cursor — for sentence lookups that means the caller's sentence
/// list has drifted out of sync with the caller's text.
pub fn locate(needle: &str, haystack: &str, search_from: usize) -> Result<(usize, usize)> {
    if needle.trim().is_empty() {
        return Err(TextError::EmptyInput { name: "needle" });
    }
    if haystack.trim().is_empty() {
        return Err(TextError::EmptyInput { name: "haystack" });
    }

    let needle = normalize_quotes(needle);
    let haystack = normalize_quotes(haystack);

    let Some(from_byte) = byte_of_char(&haystack, search_from) else {
        return Err(TextError::not_in_text(&needle, search_from));
    };

    match haystack[from_byte..].find(&needle) {
        Some(rel) => {
            let byte_start = from_byte + rel;
            let start = haystack[..byte_start].chars().count();
            let end = start + needle.chars().count();
            Ok((start, end))
        }
        None => Err(TextError::not_in_text(&needle, search_from)),
    }
}

/// Character offset of the first non-whitespace character; `None` if the
/// text is empty or all whitespace.
pub fn offset_of_first_nonwhitespace(text: &str) -> Option<usize> {
    text.chars().position(|c| !c.is_whitespace())
}

/// Byte offset of the `char_idx`-th character. `Some(s.len())` for the
/// one-past-the-end position, `None` beyond that.
pub(crate) fn byte_of_char(s: &str, char_idx: usize) -> Option<usize> {
    s.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}

/// Slice by character offsets. Offsets past the end clamp to the end.
pub(crate) fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    let byte_end = byte_of_char(s, end).unwrap_or(s.len());
    let byte_start = byte_of_char(s, start).unwrap_or(s.len()).min(byte_end);
    &s[byte_start..byte_end]
}
