//! Verse identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, totally ordered identifier for one verse.
///
/// A `VerseId` wraps the verse's ordinal within its corpus. The engine never
/// interprets the ordinal beyond ordering and adjacency (proximity blur
/// credits ordinal neighbors), so any corpus with a stable enumeration order
/// can supply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerseId(u32);

impl VerseId {
    /// Create a verse id from its corpus ordinal.
    pub fn new(ordinal: u32) -> Self {
        VerseId(ordinal)
    }

    /// The ordinal of this verse within its corpus.
    pub fn ordinal(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VerseId {
    fn from(ordinal: u32) -> Self {
        VerseId(ordinal)
    }
}
