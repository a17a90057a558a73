//! Suffix-stripping stemmer for root expansion.

/// Common English suffixes, checked in order. `es` precedes `s` so the
/// longer of the overlapping pair wins; a word never loses more than one
/// suffix.
const ENDINGS: &[&str] = &["es", "'s", "s", "ing", "ed", "er", "ly"];

/// A stemmer that reduces a word to an approximate root by removing one
/// common suffix.
///
/// The root only has to be good enough for prefix expansion to recover the
/// word's family; callers are expected to fall back to the original word
/// when the root matches nothing (`se` from `seed` would otherwise match
/// `sea`, `search`, ...).
#[derive(Debug, Clone, Default)]
pub struct Stemmer;

impl Stemmer {
    /// Create a new stemmer.
    pub fn new() -> Self {
        Stemmer
    }

    /// The approximate root of a word.
    pub fn root(&self, word: &str) -> String {
        for ending in ENDINGS {
            if word.len() > ending.len() + 2 && word.ends_with(ending) {
                return word[..word.len() - ending.len()].to_string();
            }
        }

        word.to_string()
    }
}
