//! Fuzzy relevance ranking over free text.

use crate::analysis::{split_words, Stemmer, StopList};
use crate::index::Index;
use crate::passage::VerseTally;

/// Score the corpus against free text, most relevant first.
///
/// Two passes over the significant words of `text` feed the tally:
///
/// 1. Each word's exact matches merge in with proximity blur, so a verse
///    next to a hit collects partial credit.
/// 2. Each word is stemmed; if the root matches nothing exactly, the
///    original word stands in for it (the root of `seed` is `se`, which
///    would otherwise drag in `sea` and everything else). The
///    root-or-original word is then expanded by prefix, and the union of
///    the expansion's matches goes through a separate flattened tally
///    before merging, so a stem with many suffix forms scores one unit per
///    verse, not one per form.
///
/// Lookups are total, so ranking never fails; an unbuilt index just
/// produces an empty tally.
pub fn best_match(
    index: &dyn Index,
    stemmer: &Stemmer,
    stop_list: &StopList,
    blur_radius: u32,
    text: &str,
) -> VerseTally {
    let words = split_words(text);
    let significant = stop_list.strip(&words);

    let mut tally = VerseTally::with_blur(blur_radius);

    for word in &significant {
        tally.add_all(&index.find_word(word));
    }

    for word in &significant {
        let mut root = stemmer.root(word);
        if index.find_word(&root).is_empty() {
            root = word.to_string();
        }

        let mut expansion = VerseTally::new();
        for expanded in index.find_prefix(&root) {
            expansion.add_all(&index.find_word(&expanded));
        }
        expansion.flatten();

        tally.add_all_tally(&expansion);
    }

    tally
}
