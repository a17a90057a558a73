//! Scored verse sets for ranked results.

use std::collections::BTreeMap;

use crate::passage::{VerseId, VerseSet};

/// A verse set variant that maps each verse to an integer score.
///
/// A tally is created with a fixed blur radius. Merging a [`VerseSet`]
/// credits each member verse `radius + 1` at its own ordinal and
/// `radius + 1 - d` at ordinal distance `d` up to the radius, so verses
/// near a match collect partial credit. Merging another tally sums scores
/// verbatim, which keeps flattened contributions bounded at one unit per
/// verse.
#[derive(Debug, Clone, Default)]
pub struct VerseTally {
    board: BTreeMap<VerseId, u32>,
    blur_radius: u32,
}

impl VerseTally {
    /// Create an empty tally with no proximity credit.
    pub fn new() -> Self {
        VerseTally::with_blur(0)
    }

    /// Create an empty tally that spreads credit to verses within
    /// `radius` ordinals of every merged match.
    pub fn with_blur(radius: u32) -> Self {
        VerseTally {
            board: BTreeMap::new(),
            blur_radius: radius,
        }
    }

    /// The blur radius this tally was created with.
    pub fn blur_radius(&self) -> u32 {
        self.blur_radius
    }

    /// The current score of a verse (zero if it never scored).
    pub fn score(&self, verse: VerseId) -> u32 {
        self.board.get(&verse).copied().unwrap_or(0)
    }

    /// The number of verses with a nonzero score.
    pub fn len(&self) -> usize {
        self.board.len()
    }

    /// Check whether no verse has scored yet.
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    fn increment(&mut self, verse: VerseId, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.board.entry(verse).or_insert(0) += amount;
    }

    /// Merge a verse set, crediting each member and its ordinal neighbors
    /// according to the blur radius.
    pub fn add_all(&mut self, verses: &VerseSet) {
        let radius = self.blur_radius;
        for verse in verses.iter() {
            let ordinal = verse.ordinal();
            self.increment(verse, radius + 1);

            for d in 1..=radius {
                if let Some(below) = ordinal.checked_sub(d) {
                    self.increment(VerseId::new(below), radius + 1 - d);
                }
                if let Some(above) = ordinal.checked_add(d) {
                    self.increment(VerseId::new(above), radius + 1 - d);
                }
            }
        }
    }

    /// Merge another tally, summing scores verse by verse.
    pub fn add_all_tally(&mut self, other: &VerseTally) {
        for (&verse, &score) in &other.board {
            self.increment(verse, score);
        }
    }

    /// Cap every nonzero score to one unit.
    ///
    /// Applied to a temporary tally before merging, this stops a prolific
    /// term from dominating the ranking purely by breadth of expansion.
    pub fn flatten(&mut self) {
        for score in self.board.values_mut() {
            *score = 1;
        }
    }

    /// The scored verses, highest score first, ties by ascending ordinal.
    pub fn ranked(&self) -> Vec<(VerseId, u32)> {
        let mut entries: Vec<(VerseId, u32)> =
            self.board.iter().map(|(&v, &s)| (v, s)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// The scored verses as a plain set, dropping scores.
    pub fn to_verse_set(&self) -> VerseSet {
        self.board.keys().copied().collect()
    }
}
