//! The search engine facade.

use std::sync::Arc;

use crate::analysis::{Stemmer, StopList};
use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{Index, IndexStore};
use crate::passage::{VerseSet, VerseTally};
use crate::query::{QueryExecutor, QueryTokenizer, TriggerTable};
use crate::search::best_match;
use crate::storage::Storage;

/// One corpus, one index, two kinds of query.
///
/// The engine wires a [`Corpus`] and a [`Storage`] to the index store and
/// the query machinery. An existing index is loaded at construction;
/// otherwise call [`build_index`](Self::build_index) (background) or
/// [`build_index_blocking`](Self::build_index_blocking) and queries will
/// degrade to empty results until the build lands.
///
/// Engines are cheap to share behind an `Arc`: every piece of per-query
/// state lives in the executor created for that query.
pub struct SearchEngine {
    index: Arc<IndexStore>,
    tokenizer: QueryTokenizer,
    stemmer: Stemmer,
    stop_list: StopList,
    config: EngineConfig,
}

impl SearchEngine {
    /// Create an engine with the default configuration and vocabulary.
    pub fn new(corpus: Arc<dyn Corpus>, storage: Arc<dyn Storage>) -> Result<Self> {
        Self::with_config(corpus, storage, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(
        corpus: Arc<dyn Corpus>,
        storage: Arc<dyn Storage>,
        config: EngineConfig,
    ) -> Result<Self> {
        Self::with_triggers(corpus, storage, config, TriggerTable::standard())
    }

    /// Create an engine with an explicit configuration and trigger table.
    pub fn with_triggers(
        corpus: Arc<dyn Corpus>,
        storage: Arc<dyn Storage>,
        config: EngineConfig,
        triggers: TriggerTable,
    ) -> Result<Self> {
        let index = Arc::new(IndexStore::open(corpus, storage, config.clone())?);

        Ok(SearchEngine {
            index,
            tokenizer: QueryTokenizer::new(triggers),
            stemmer: Stemmer::new(),
            stop_list: StopList::new(),
            config,
        })
    }

    /// Run an operator query and return the matching verses.
    ///
    /// Fails only on malformed queries; unknown words and an unbuilt
    /// index both resolve to empty sets.
    pub fn search(&self, query: &str) -> Result<VerseSet> {
        let tokens = self.tokenizer.tokenize(query)?;
        let executor = QueryExecutor::new(
            self.index.as_ref(),
            &self.stemmer,
            &self.tokenizer,
            tokens,
        );
        executor.execute()
    }

    /// Rank the corpus against free text, most relevant first.
    pub fn best_match(&self, text: &str) -> VerseTally {
        best_match(
            self.index.as_ref(),
            &self.stemmer,
            &self.stop_list,
            self.config.blur_radius,
            text,
        )
    }

    /// Whether a built index is answering queries.
    pub fn is_indexed(&self) -> bool {
        self.index.is_indexed()
    }

    /// Build the index on a background worker. Returns `false` when a
    /// build is already in flight.
    pub fn build_index(&self) -> bool {
        Arc::clone(&self.index).build_background()
    }

    /// Build the index on the calling thread.
    pub fn build_index_blocking(&self) -> Result<()> {
        self.index.build()
    }

    /// Delete the index files and return to the unbuilt state.
    pub fn delete_index(&self) -> Result<()> {
        self.index.delete()
    }

    /// Direct word lookup against the index.
    pub fn find_word(&self, word: &str) -> VerseSet {
        self.index.find_word(word)
    }

    /// Direct prefix lookup against the index.
    pub fn find_prefix(&self, prefix: &str) -> Vec<String> {
        self.index.find_prefix(prefix)
    }
}
