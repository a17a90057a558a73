//! In-memory storage implementation for testing and ephemeral indexes.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{CanticleError, Result};
use crate::storage::traits::{Storage, StorageInput, StorageOutput};

/// An in-memory storage implementation.
///
/// Inputs snapshot a file's bytes at open time, so a reader is never
/// affected by a concurrent rewrite of the same name.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Arc<[u8]>>>>,
}

impl MemoryStorage {
    /// Create a new memory storage.
    pub fn new() -> Self {
        MemoryStorage {
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The number of files stored.
    pub fn file_count(&self) -> usize {
        self.files.lock().len()
    }
}

impl Storage for MemoryStorage {
    fn open_input(&self, name: &str) -> Result<Box<dyn StorageInput>> {
        let files = self.files.lock();
        let data = files
            .get(name)
            .cloned()
            .ok_or_else(|| CanticleError::storage(format!("File not found: {name}")))?;

        Ok(Box::new(MemoryInput {
            cursor: Cursor::new(data),
        }))
    }

    fn create_output(&self, name: &str) -> Result<Box<dyn StorageOutput>> {
        Ok(Box::new(MemoryOutput {
            name: name.to_string(),
            buffer: Vec::new(),
            files: Arc::clone(&self.files),
        }))
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files.lock().contains_key(name)
    }

    fn delete_file(&self, name: &str) -> Result<()> {
        self.files.lock().remove(name);
        Ok(())
    }

    fn file_size(&self, name: &str) -> Result<u64> {
        let files = self.files.lock();
        files
            .get(name)
            .map(|data| data.len() as u64)
            .ok_or_else(|| CanticleError::storage(format!("File not found: {name}")))
    }
}

/// A reader over a snapshot of an in-memory file.
#[derive(Debug)]
struct MemoryInput {
    cursor: Cursor<Arc<[u8]>>,
}

impl Read for MemoryInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for MemoryInput {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl StorageInput for MemoryInput {
    fn size(&self) -> Result<u64> {
        Ok(self.cursor.get_ref().len() as u64)
    }
}

/// A writer that publishes its buffer into the file map on finish (and on
/// drop, so abandoned writers still leave their bytes visible).
#[derive(Debug)]
struct MemoryOutput {
    name: String,
    buffer: Vec<u8>,
    files: Arc<Mutex<HashMap<String, Arc<[u8]>>>>,
}

impl MemoryOutput {
    fn publish(&mut self) {
        let data: Arc<[u8]> = Arc::from(self.buffer.as_slice());
        self.files.lock().insert(self.name.clone(), data);
    }
}

impl Write for MemoryOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl StorageOutput for MemoryOutput {
    fn position(&self) -> u64 {
        self.buffer.len() as u64
    }

    fn finish(&mut self) -> Result<()> {
        self.publish();
        Ok(())
    }
}

impl Drop for MemoryOutput {
    fn drop(&mut self) {
        self.publish();
    }
}
