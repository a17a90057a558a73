//! The index store: loading, querying, and (re)building the on-disk index.

use std::io::{BufReader, Read, Seek, SeekFrom};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{error, info, warn};
use parking_lot::{Mutex, RwLock};

use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::builder::IndexBuilder;
use crate::index::directory::{Directory, IndexEntry};
use crate::index::Index;
use crate::passage::VerseSet;
use crate::storage::{Storage, StorageInput};

/// Serializes index builds process-wide so two builds never race on the
/// same files.
static BUILD_LOCK: Mutex<()> = Mutex::new(());

/// A loaded, immutable index: the parsed directory plus an open handle on
/// the blob file. Seek-and-read on the handle is not atomic, so it sits
/// behind its own mutex.
struct LoadedIndex {
    directory: Directory,
    blob: Mutex<Box<dyn StorageInput>>,
}

/// The persistent inverted index over one corpus.
///
/// Queries are read-only against already-flushed files and degrade to
/// empty results while the index is absent or still building. The build
/// itself runs at most once per corpus per process, optionally on a
/// background worker.
pub struct IndexStore {
    corpus: Arc<dyn Corpus>,
    storage: Arc<dyn Storage>,
    config: EngineConfig,
    state: RwLock<Option<LoadedIndex>>,
    building: AtomicBool,
}

impl IndexStore {
    /// Create a store and load the index if one is already on disk.
    pub fn open(
        corpus: Arc<dyn Corpus>,
        storage: Arc<dyn Storage>,
        config: EngineConfig,
    ) -> Result<Self> {
        let store = IndexStore {
            corpus,
            storage,
            config,
            state: RwLock::new(None),
            building: AtomicBool::new(false),
        };

        if store.storage.file_exists(&store.config.directory_file) {
            store.load()?;
        }

        Ok(store)
    }

    /// Whether a built index is loaded and answering queries.
    pub fn is_indexed(&self) -> bool {
        self.state.read().is_some()
    }

    /// Parse the directory file and open the blob read-only.
    pub fn load(&self) -> Result<()> {
        let input = self.storage.open_input(&self.config.directory_file)?;
        let directory = Directory::parse(BufReader::new(input))?;
        info!("loaded index directory: {} words", directory.len());

        self.install(directory)
    }

    /// Build the index now, on the calling thread.
    ///
    /// A no-op when an index is already loaded; delete it first to force a
    /// rebuild.
    pub fn build(&self) -> Result<()> {
        let _guard = BUILD_LOCK.lock();

        if self.is_indexed() {
            return Ok(());
        }

        let builder = IndexBuilder::new(
            Arc::clone(&self.corpus),
            Arc::clone(&self.storage),
            self.config.clone(),
        );
        let directory = builder.build()?;

        self.install(directory)
    }

    /// Kick off a build on a background worker thread.
    ///
    /// Returns `false` when this store already has a build in flight.
    /// Queries keep returning empty results until the build lands.
    pub fn build_background(self: Arc<Self>) -> bool {
        if self.building.swap(true, Ordering::SeqCst) {
            return false;
        }

        std::thread::spawn(move || {
            if let Err(e) = self.build() {
                error!("background index build failed: {e}");
            }
            self.building.store(false, Ordering::SeqCst);
        });

        true
    }

    /// Drop the loaded index and remove both files.
    pub fn delete(&self) -> Result<()> {
        *self.state.write() = None;
        self.storage.delete_file(&self.config.directory_file)?;
        self.storage.delete_file(&self.config.blob_file)?;
        Ok(())
    }

    fn install(&self, directory: Directory) -> Result<()> {
        let blob = self.storage.open_input(&self.config.blob_file)?;
        *self.state.write() = Some(LoadedIndex {
            directory,
            blob: Mutex::new(blob),
        });
        Ok(())
    }

    fn read_record(loaded: &LoadedIndex, entry: IndexEntry) -> Result<VerseSet> {
        let mut handle = loaded.blob.lock();
        handle.seek(SeekFrom::Start(entry.offset))?;

        let mut record = vec![0u8; entry.length as usize];
        handle.read_exact(&mut record)?;

        VerseSet::from_bytes(&record)
    }
}

impl Index for IndexStore {
    fn find_word(&self, word: &str) -> VerseSet {
        let word = word.to_lowercase();

        let state = self.state.read();
        let Some(loaded) = state.as_ref() else {
            return VerseSet::new();
        };
        let Some(entry) = loaded.directory.get(&word) else {
            return VerseSet::new();
        };

        match Self::read_record(loaded, entry) {
            Ok(verses) => verses,
            Err(e) => {
                warn!(
                    "lookup for {word:?} degraded to empty (offset={}, length={}): {e}",
                    entry.offset, entry.length
                );
                VerseSet::new()
            }
        }
    }

    fn find_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();

        let state = self.state.read();
        match state.as_ref() {
            Some(loaded) => loaded.directory.words_with_prefix(&prefix),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::VecCorpus;
    use crate::passage::VerseId;
    use crate::storage::MemoryStorage;
    use std::io::Write;

    fn corpus() -> Arc<VecCorpus> {
        Arc::new(VecCorpus::new(vec![
            "the lord is my shepherd".to_string(),
            "the lord is good".to_string(),
            "my shepherd leads me".to_string(),
        ]))
    }

    fn built_store() -> IndexStore {
        let store = IndexStore::open(
            corpus(),
            Arc::new(MemoryStorage::new()),
            EngineConfig::default(),
        )
        .unwrap();
        store.build().unwrap();
        store
    }

    fn ordinals(verses: &VerseSet) -> Vec<u32> {
        verses.iter().map(|v| v.ordinal()).collect()
    }

    #[test]
    fn test_unbuilt_index_degrades_to_empty() {
        let store = IndexStore::open(
            corpus(),
            Arc::new(MemoryStorage::new()),
            EngineConfig::default(),
        )
        .unwrap();

        assert!(!store.is_indexed());
        assert!(store.find_word("lord").is_empty());
        assert!(store.find_prefix("lo").is_empty());
    }

    #[test]
    fn test_find_word() {
        let store = built_store();

        assert!(store.is_indexed());
        assert_eq!(ordinals(&store.find_word("lord")), vec![0, 1]);
        assert_eq!(ordinals(&store.find_word("LORD")), vec![0, 1]);
        assert_eq!(ordinals(&store.find_word("shepherd")), vec![0, 2]);
        assert!(store.find_word("nonexistent").is_empty());
    }

    #[test]
    fn test_find_prefix() {
        let store = built_store();

        assert_eq!(store.find_prefix("shep"), vec!["shepherd"]);
        assert_eq!(store.find_prefix("L"), vec!["leads", "lord"]);
        assert!(store.find_prefix("xyz").is_empty());
    }

    #[test]
    fn test_reload_from_disk() {
        let storage = Arc::new(MemoryStorage::new());
        let store =
            IndexStore::open(corpus(), storage.clone(), EngineConfig::default()).unwrap();
        store.build().unwrap();

        // A second store over the same storage loads at open.
        let reopened = IndexStore::open(corpus(), storage, EngineConfig::default()).unwrap();
        assert!(reopened.is_indexed());
        assert_eq!(ordinals(&reopened.find_word("good")), vec![1]);
    }

    #[test]
    fn test_delete_unloads_and_removes_files() {
        let storage = Arc::new(MemoryStorage::new());
        let store =
            IndexStore::open(corpus(), storage.clone(), EngineConfig::default()).unwrap();
        store.build().unwrap();

        store.delete().unwrap();

        assert!(!store.is_indexed());
        assert!(!storage.file_exists("words.idx"));
        assert!(!storage.file_exists("words.dat"));
        assert!(store.find_word("lord").is_empty());
    }

    #[test]
    fn test_corrupt_record_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());

        // A directory pointing past the end of a too-short blob.
        let mut out = storage.create_output("words.idx").unwrap();
        out.write_all(b"lord:100:8\n").unwrap();
        out.finish().unwrap();
        drop(out);
        let mut out = storage.create_output("words.dat").unwrap();
        out.write_all(b"\x00").unwrap();
        out.finish().unwrap();
        drop(out);

        let store = IndexStore::open(corpus(), storage, EngineConfig::default()).unwrap();

        assert!(store.is_indexed());
        assert!(store.find_word("lord").is_empty());
    }

    #[test]
    fn test_background_build_lands() {
        let store = Arc::new(
            IndexStore::open(
                corpus(),
                Arc::new(MemoryStorage::new()),
                EngineConfig::default(),
            )
            .unwrap(),
        );

        assert!(Arc::clone(&store).build_background());

        // Wait for the worker to finish.
        for _ in 0..500 {
            if store.is_indexed() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert!(store.is_indexed());
        assert_eq!(ordinals(&store.find_word("leads")), vec![2]);
    }
}
