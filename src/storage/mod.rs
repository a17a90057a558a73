//! Storage abstraction layer.
//!
//! The index store reads and writes its two files (directory and blob)
//! through the [`Storage`] trait, so the same build and lookup code runs
//! against the file system or an in-memory backend in tests. Every
//! `open_input` call returns an independent handle; seek-and-read is not
//! atomic, so concurrent readers either hold their own handle or
//! synchronize a shared one externally.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{Storage, StorageInput, StorageOutput};
