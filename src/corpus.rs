//! Corpus provider seam.

use crate::error::{CanticleError, Result};
use crate::passage::VerseId;

/// A source of verse text, enumerable in corpus order.
///
/// The index builder streams every verse exactly once through this trait;
/// queries never touch it. Implementations are free to fetch text lazily
/// (a backend file, a remote module); a failed fetch is tolerated by the
/// builder up to its retry budget.
pub trait Corpus: Send + Sync {
    /// Every verse id in the corpus, in corpus order.
    fn verse_ids(&self) -> Vec<VerseId>;

    /// The plain text of one verse.
    fn text(&self, verse: VerseId) -> Result<String>;
}

/// An in-memory corpus over a vector of verse texts.
///
/// Verse `n` of the vector gets ordinal `n`. Useful for tests and for
/// small corpora already loaded elsewhere.
#[derive(Debug, Clone, Default)]
pub struct VecCorpus {
    verses: Vec<String>,
}

impl VecCorpus {
    /// Create a corpus from verse texts, ordinals assigned by position.
    pub fn new(verses: Vec<String>) -> Self {
        VecCorpus { verses }
    }

    /// The number of verses.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Check whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

impl Corpus for VecCorpus {
    fn verse_ids(&self) -> Vec<VerseId> {
        (0..self.verses.len() as u32).map(VerseId::new).collect()
    }

    fn text(&self, verse: VerseId) -> Result<String> {
        self.verses
            .get(verse.ordinal() as usize)
            .cloned()
            .ok_or_else(|| CanticleError::corpus(format!("no such verse: {verse}")))
    }
}
