//! The in-memory word directory and its text line format.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::ops::Bound;

use log::warn;

use crate::error::{CanticleError, Result};

/// Where one word's serialized verse set lives in the blob file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Byte offset of the record in the blob file.
    pub offset: u64,
    /// Length of the record in bytes.
    pub length: u32,
}

/// The word directory: a sorted map from case-folded word to blob record.
///
/// Ordering supports prefix-range queries. The persisted form is one
/// `word:offset:length` line per word, decimal ASCII, sorted by word.
/// This is the legacy text format, preserved so existing index directories stay
/// readable.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: BTreeMap<String, IndexEntry>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Directory {
            entries: BTreeMap::new(),
        }
    }

    /// Record where a word's verse set was written.
    pub fn insert(&mut self, word: String, entry: IndexEntry) {
        self.entries.insert(word, entry);
    }

    /// Look up the blob record for an exact word.
    pub fn get(&self, word: &str) -> Option<IndexEntry> {
        self.entries.get(word).copied()
    }

    /// All words sharing a prefix, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(word, _)| word.starts_with(prefix))
            .map(|(word, _)| word.clone())
            .collect()
    }

    /// The number of indexed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a directory from its text form.
    ///
    /// Malformed lines are logged and skipped rather than failing the
    /// load; a directory that is wrong about an offset will surface later
    /// as a degraded (empty) lookup, not a crash.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut directory = Directory::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            match parse_line(&line) {
                Some((word, entry)) => directory.insert(word, entry),
                None => warn!("skipping malformed directory line: {line}"),
            }
        }

        Ok(directory)
    }

    /// Write the directory in its text form, sorted by word.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (word, entry) in &self.entries {
            writeln!(writer, "{}:{}:{}", word, entry.offset, entry.length)
                .map_err(|e| CanticleError::index(format!("directory write failed: {e}")))?;
        }

        Ok(())
    }
}

/// Parse one `word:offset:length` line. Offset and length are the last two
/// colon-separated fields, so a word containing a colon still parses.
fn parse_line(line: &str) -> Option<(String, IndexEntry)> {
    let mut fields = line.rsplitn(3, ':');

    let length = fields.next()?.parse::<u32>().ok()?;
    let offset = fields.next()?.parse::<u64>().ok()?;
    let word = fields.next()?;

    if word.is_empty() {
        return None;
    }

    Some((word.to_string(), IndexEntry { offset, length }))
}
