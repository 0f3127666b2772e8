// Word extraction for counting purposes. Punctuation is stripped rather
// than treated as a delimiter, so "dog-sitter" and "it's" stay single words
// while "? ^ & *" contributes none.

/// Unicode punctuation stripped alongside ASCII punctuation: the leader,
/// combined question/exclamation, and quote variants the segmenter knows.
const UNICODE_STRIP: &[char] = &[
    '\u{2024}', '\u{2025}', '\u{2026}', // leaders
    '\u{203C}', '\u{2047}', '\u{2048}', '\u{2049}', // combined ?/!
    '\u{201C}', '\u{201D}', '\u{201F}', '\u{275D}', '\u{275E}', // double quotes
    '\u{FF02}', '\u{301D}', '\u{301E}',
    '\u{201B}', '\u{2018}', '\u{2019}', '\u{275B}', '\u{275C}', // single quotes
];

const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';

/// Split a sentence into its words.
///
/// ASCII punctuation is removed, except hyphens and apostrophes, which are
/// part of their word. En and em dashes become spaces so the clauses they
/// join are counted as separate words. Empty or whitespace-only input
/// yields an empty vec.
pub fn words(sentence: &str) -> Vec<String> {
    let cleaned: String = sentence
        .chars()
        .filter_map(|c| {
            if c == EN_DASH || c == EM_DASH {
                Some(' ')
            } else if is_stripped(c) {
                None
            } else {
                Some(c)
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        // A token made only of kept punctuation is not a word.
        .filter(|w| w.chars().any(|c| c != '-' && c != '\''))
        .map(str::to_string)
        .collect()
}

fn is_stripped(c: char) -> bool {
    (c.is_ascii_punctuation() && c != '-' && c != '\'') || UNICODE_STRIP.contains(&c)
}
