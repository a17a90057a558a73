//! Storage abstraction traits.

use std::io::{Read, Seek, Write};

use crate::error::Result;

/// A named-file storage backend.
pub trait Storage: Send + Sync + std::fmt::Debug {
    /// Open a file for reading. Each call returns an independent handle.
    fn open_input(&self, name: &str) -> Result<Box<dyn StorageInput>>;

    /// Create a file for writing, truncating any existing content.
    fn create_output(&self, name: &str) -> Result<Box<dyn StorageOutput>>;

    /// Check if a file exists.
    fn file_exists(&self, name: &str) -> bool;

    /// Delete a file. Deleting a missing file is not an error.
    fn delete_file(&self, name: &str) -> Result<()>;

    /// Get the size of a file in bytes.
    fn file_size(&self, name: &str) -> Result<u64>;
}

/// A trait for reading data from storage.
pub trait StorageInput: Read + Seek + Send + std::fmt::Debug {
    /// Get the size of the input stream.
    fn size(&self) -> Result<u64>;
}

/// A trait for writing data to storage.
pub trait StorageOutput: Write + Send + std::fmt::Debug {
    /// The number of bytes written so far.
    fn position(&self) -> u64;

    /// Flush buffered writes down to the backend.
    fn finish(&mut self) -> Result<()>;
}

impl StorageInput for Box<dyn StorageInput> {
    fn size(&self) -> Result<u64> {
        self.as_ref().size()
    }
}

impl StorageOutput for Box<dyn StorageOutput> {
    fn position(&self) -> u64 {
        self.as_ref().position()
    }

    fn finish(&mut self) -> Result<()> {
        self.as_mut().finish()
    }
}
