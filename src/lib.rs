//! # Canticle
//!
//! A lightweight full-text search library for verse-addressed corpora.
//!
//! Canticle indexes a corpus of short text units ("verses") addressed by a
//! strict ordinal key, and answers two kinds of queries against it:
//!
//! - **Operator queries**: a small grammar of single-character operators
//!   (`+` retain, `-` remove, `*` prefix expansion, `~` root expansion,
//!   `[...]` groups) executed left to right against a verse-set accumulator.
//! - **Best-match queries**: free text ranked by approximate relevance,
//!   with proximity blur and per-term contribution flattening.
//!
//! The inverted index is persisted as a sorted text directory plus a
//! length-addressed binary blob, built once per corpus and immutable after.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use canticle::corpus::VecCorpus;
//! use canticle::engine::SearchEngine;
//! use canticle::storage::MemoryStorage;
//!
//! # fn main() -> canticle::error::Result<()> {
//! let corpus = VecCorpus::new(vec![
//!     "the Lord is my shepherd".to_string(),
//!     "the Lord is good".to_string(),
//! ]);
//! let engine = SearchEngine::new(Arc::new(corpus), Arc::new(MemoryStorage::new()))?;
//! engine.build_index_blocking()?;
//!
//! let hits = engine.search("lord + good")?;
//! assert_eq!(hits.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod passage;
pub mod query;
pub mod search;
pub mod storage;
pub mod util;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.
    pub use crate::config::EngineConfig;
    pub use crate::corpus::{Corpus, VecCorpus};
    pub use crate::engine::SearchEngine;
    pub use crate::error::{CanticleError, Result};
    pub use crate::passage::{VerseId, VerseSet, VerseTally};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
