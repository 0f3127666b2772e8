// Quote normalization applied before any scanning or offset-based matching.
// Every replacement is one char for one char, so character offsets computed
// against normalized text remain valid against the raw text.

/// Unicode double-quote variants that the scanner folds into a straight `"`.
pub const DOUBLE_QUOTE_VARIANTS: &[char] = &[
    '\u{201C}', // left curly
    '\u{201D}', // right curly
    '\u{201F}', // high reversed
    '\u{275D}', // heavy left ornament
    '\u{275E}', // heavy right ornament
    '\u{FF02}', // fullwidth
    '\u{301D}', // reversed prime
    '\u{301E}', // double prime
];

/// Replace all double-quote variants with a straight `"`.
pub fn normalize_quotes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_quotes_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer to allow reuse in batch scenarios.
pub fn normalize_quotes_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for ch in text.chars() {
        if DOUBLE_QUOTE_VARIANTS.contains(&ch) {
            buffer.push('"');
        } else {
            buffer.push(ch);
        }
    }
}
