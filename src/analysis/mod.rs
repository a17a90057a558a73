//! Text analysis for indexing and best-match queries.
//!
//! Index builds and free-text queries share one normalization path:
//! [`split_words`] turns verse text into case-folded words, [`Stemmer`]
//! reduces a word to an approximate root for morphological expansion, and
//! [`StopList`] filters out words too common to carry relevance.
//!
//! The stemmer is deliberately crude suffix stripping, not a linguistic
//! stemmer; it only has to land near enough a root for prefix expansion
//! to recover the word family.

pub mod stem;
pub mod stop;
pub mod words;

pub use stem::Stemmer;
pub use stop::StopList;
pub use words::split_words;
