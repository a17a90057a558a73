//! Index construction: one streaming pass over the corpus, then a flush.

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info, warn};

use crate::analysis::split_words;
use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::{CanticleError, Result};
use crate::index::directory::{Directory, IndexEntry};
use crate::passage::VerseSet;
use crate::storage::{Storage, StorageOutput};

/// Builds the inverted index and persists it through a [`Storage`].
///
/// The build is append-only and happens at most once per corpus: read
/// every verse in corpus order, accumulate word to verse-set in memory,
/// then write each word's serialized set into the blob file and the
/// directory as sorted text. A verse that fails to read is tolerated up
/// to the configured budget; a write failure is fatal and removes the
/// partial files.
pub struct IndexBuilder {
    corpus: Arc<dyn Corpus>,
    storage: Arc<dyn Storage>,
    config: EngineConfig,
}

impl IndexBuilder {
    /// Create a builder over a corpus and a storage backend.
    pub fn new(corpus: Arc<dyn Corpus>, storage: Arc<dyn Storage>, config: EngineConfig) -> Self {
        IndexBuilder {
            corpus,
            storage,
            config,
        }
    }

    /// Run the build. Returns the in-memory directory of the index that
    /// was just persisted.
    pub fn build(&self) -> Result<Directory> {
        let accumulator = self.accumulate()?;

        match self.flush(accumulator) {
            Ok(directory) => {
                info!("index build complete: {} words", directory.len());
                Ok(directory)
            }
            Err(e) => {
                // Never leave a half-written index looking usable.
                let _ = self.storage.delete_file(&self.config.directory_file);
                let _ = self.storage.delete_file(&self.config.blob_file);
                Err(e)
            }
        }
    }

    /// Pass one: stream the corpus and build the word map in memory.
    fn accumulate(&self) -> Result<AHashMap<String, VerseSet>> {
        let mut accumulator: AHashMap<String, VerseSet> = AHashMap::new();
        let mut errors = 0u32;

        for verse in self.corpus.verse_ids() {
            match self.corpus.text(verse) {
                Ok(text) => {
                    for word in split_words(&text) {
                        accumulator.entry(word).or_default().insert(verse);
                    }
                }
                Err(e) => {
                    errors += 1;
                    warn!("failed to read verse {verse} ({errors} so far): {e}");

                    if errors > self.config.read_error_budget {
                        return Err(CanticleError::index(format!(
                            "giving up after {errors} verse read failures"
                        )));
                    }
                }
            }

            // The full pass can take a while; let other threads in.
            std::thread::yield_now();
        }

        debug!("accumulated {} distinct words", accumulator.len());
        Ok(accumulator)
    }

    /// Pass two: write the blob records and the directory file.
    fn flush(&self, accumulator: AHashMap<String, VerseSet>) -> Result<Directory> {
        // Sort words so directory lines and blob records share one order.
        let sorted: BTreeMap<String, VerseSet> = accumulator.into_iter().collect();

        let mut blob = self.storage.create_output(&self.config.blob_file)?;
        let mut directory = Directory::new();

        for (word, verses) in &sorted {
            let record = verses.to_bytes();
            let offset = blob.position();

            blob.write_all(&record)
                .map_err(|e| CanticleError::index(format!("blob write failed: {e}")))?;

            directory.insert(
                word.clone(),
                IndexEntry {
                    offset,
                    length: record.len() as u32,
                },
            );
        }

        blob.finish()?;

        let mut out = self.storage.create_output(&self.config.directory_file)?;
        directory.write_to(&mut out)?;
        out.finish()?;

        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::VecCorpus;
    use crate::passage::VerseId;
    use crate::storage::MemoryStorage;

    fn corpus() -> Arc<VecCorpus> {
        Arc::new(VecCorpus::new(vec![
            "the lord is my shepherd".to_string(),
            "the lord is good".to_string(),
            "my shepherd leads me".to_string(),
        ]))
    }

    #[test]
    fn test_build_writes_both_files() {
        let storage = Arc::new(MemoryStorage::new());
        let builder = IndexBuilder::new(corpus(), storage.clone(), EngineConfig::default());

        let directory = builder.build().unwrap();

        assert!(storage.file_exists("words.idx"));
        assert!(storage.file_exists("words.dat"));
        assert!(directory.get("shepherd").is_some());
        assert!(directory.get("the").is_some());
    }

    #[test]
    fn test_directory_addresses_blob_records() {
        let storage = Arc::new(MemoryStorage::new());
        let builder = IndexBuilder::new(corpus(), storage.clone(), EngineConfig::default());

        let directory = builder.build().unwrap();
        let entry = directory.get("lord").unwrap();

        let mut input = storage.open_input("words.dat").unwrap();
        use std::io::{Read, Seek, SeekFrom};
        input.seek(SeekFrom::Start(entry.offset)).unwrap();
        let mut record = vec![0u8; entry.length as usize];
        input.read_exact(&mut record).unwrap();

        let verses = VerseSet::from_bytes(&record).unwrap();
        assert!(verses.contains(VerseId::new(0)));
        assert!(verses.contains(VerseId::new(1)));
        assert!(!verses.contains(VerseId::new(2)));
    }

    /// A corpus whose verses all fail to read.
    #[derive(Debug)]
    struct FailingCorpus {
        verses: u32,
    }

    impl Corpus for FailingCorpus {
        fn verse_ids(&self) -> Vec<VerseId> {
            (0..self.verses).map(VerseId::new).collect()
        }

        fn text(&self, verse: VerseId) -> Result<String> {
            Err(anyhow::anyhow!("verse {verse} unreadable").into())
        }
    }

    #[test]
    fn test_read_failures_within_budget_are_tolerated() {
        let storage = Arc::new(MemoryStorage::new());
        let mut config = EngineConfig::default();
        config.read_error_budget = 10;

        let builder = IndexBuilder::new(Arc::new(FailingCorpus { verses: 5 }), storage, config);

        // All five verses fail, but the budget covers them.
        let directory = builder.build().unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_read_failures_over_budget_abort() {
        let storage = Arc::new(MemoryStorage::new());
        let mut config = EngineConfig::default();
        config.read_error_budget = 3;

        let builder = IndexBuilder::new(Arc::new(FailingCorpus { verses: 5 }), storage, config);

        assert!(builder.build().is_err());
    }
}
