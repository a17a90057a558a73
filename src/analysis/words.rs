//! Word extraction from verse text.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into case-folded, punctuation-stripped words.
///
/// Word boundaries follow Unicode segmentation; anything without an
/// alphanumeric character (bare punctuation, separators) is dropped.
/// This is the single normalization path shared by index builds and
/// best-match queries, so a word always looks the same on both sides.
pub fn split_words(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Normalize one word the way the index stores it.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect::<String>()
        .to_lowercase()
}
