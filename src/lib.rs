//! Rule-based sentence segmentation for English prose, with interactive
//! correction of misdetected boundaries.
//!
//! The [`SentenceSegmenter`] splits text at terminating punctuation
//! followed by whitespace, handling abbreviations, Unicode punctuation
//! variants, and closing quotes. The [`SentenceCollection`] wraps the
//! resulting sentence list and supports merge/split edits while keeping
//! every sentence locatable in the original text, so per-sentence offsets,
//! word counts, and over-threshold flags can be re-derived after each edit.

pub mod collection;
pub mod error;
pub mod locate;
pub mod segmenter;
pub mod words;

pub use collection::{AnnotatedSentence, LongSentence, SentenceCollection, DEFAULT_WORD_MAX};
pub use error::{Result, TextError};
pub use locate::{locate, offset_of_first_nonwhitespace};
pub use segmenter::{AbbreviationList, SentenceSegmenter};
pub use words::words;
