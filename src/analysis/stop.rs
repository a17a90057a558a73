//! Stop list for best-match queries.

use std::collections::HashSet;

/// The hundred-odd most frequent corpus words, by instance count. Matching
/// against any of them says nothing about relevance.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "of", "to", "in", "he", "that", "i", "a", "for", "you", "his", "is", "will",
    "they", "not", "with", "him", "it", "be", "them", "shall", "all", "my", "from", "was", "your",
    "have", "me", "but", "their", "as", "who", "said", "are", "on", "this", "when", "thou", "thy",
    "by", "were", "had", "then", "out", "so", "there", "which", "do", "one", "ye", "up", "thee",
    "at", "we", "her", "what", "men", "come", "if", "into", "came", "upon", "before", "or", "us",
    "because", "go", "an", "went", "also", "now", "let", "hath", "may", "has", "our", "these",
    "o", "am",
];

/// A membership test for words too common to rank by.
///
/// Best-match queries drop insignificant words up front; exact operator
/// queries never consult the stop list, so `search("the")` still works.
#[derive(Debug, Clone)]
pub struct StopList {
    words: HashSet<String>,
}

impl StopList {
    /// Create a stop list with the default high-frequency words.
    pub fn new() -> Self {
        StopList {
            words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Create a stop list from a custom word set.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopList {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// Whether a word is worth ranking by. Blank words are not.
    pub fn is_significant(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }

        !self.words.contains(&word.to_lowercase())
    }

    /// Drop insignificant words from a list, preserving order.
    pub fn strip<'a>(&self, words: &'a [String]) -> Vec<&'a str> {
        words
            .iter()
            .map(|w| w.as_str())
            .filter(|w| self.is_significant(w))
            .collect()
    }
}

impl Default for StopList {
    fn default() -> Self {
        StopList::new()
    }
}
