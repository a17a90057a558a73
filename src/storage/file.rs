//! File-based storage implementation.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{CanticleError, Result};
use crate::storage::traits::{Storage, StorageInput, StorageOutput};

const BUFFER_SIZE: usize = 65536;

/// A file-based storage implementation rooted in one directory.
#[derive(Debug)]
pub struct FileStorage {
    /// The root directory for storage.
    directory: PathBuf,
}

impl FileStorage {
    /// Create a new file storage in the given directory, creating the
    /// directory if it does not exist.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            std::fs::create_dir_all(&directory)
                .map_err(|e| CanticleError::storage(format!("Failed to create directory: {e}")))?;
        }

        if !directory.is_dir() {
            return Err(CanticleError::storage(format!(
                "Path is not a directory: {}",
                directory.display()
            )));
        }

        Ok(FileStorage { directory })
    }

    /// The root directory of this storage.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }
}

impl Storage for FileStorage {
    fn open_input(&self, name: &str) -> Result<Box<dyn StorageInput>> {
        let path = self.file_path(name);
        let file = File::open(&path)
            .map_err(|e| CanticleError::storage(format!("Failed to open {name}: {e}")))?;

        Ok(Box::new(FileInput::new(file)?))
    }

    fn create_output(&self, name: &str) -> Result<Box<dyn StorageOutput>> {
        let path = self.file_path(name);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| CanticleError::storage(format!("Failed to create {name}: {e}")))?;

        Ok(Box::new(FileOutput::new(file)))
    }

    fn file_exists(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    fn delete_file(&self, name: &str) -> Result<()> {
        let path = self.file_path(name);
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| CanticleError::storage(format!("Failed to delete {name}: {e}")))?;
        }

        Ok(())
    }

    fn file_size(&self, name: &str) -> Result<u64> {
        let metadata = self
            .file_path(name)
            .metadata()
            .map_err(|e| CanticleError::storage(format!("Failed to stat {name}: {e}")))?;

        Ok(metadata.len())
    }
}

/// A buffered file input.
#[derive(Debug)]
pub struct FileInput {
    reader: BufReader<File>,
    size: u64,
}

impl FileInput {
    fn new(file: File) -> Result<Self> {
        let metadata = file
            .metadata()
            .map_err(|e| CanticleError::storage(format!("Failed to get file metadata: {e}")))?;

        let size = metadata.len();
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);

        Ok(FileInput { reader, size })
    }
}

impl Read for FileInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Seek for FileInput {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.reader.seek(pos)
    }
}

impl StorageInput for FileInput {
    fn size(&self) -> Result<u64> {
        Ok(self.size)
    }
}

/// A buffered file output.
#[derive(Debug)]
pub struct FileOutput {
    writer: BufWriter<File>,
    position: u64,
}

impl FileOutput {
    fn new(file: File) -> Self {
        FileOutput {
            writer: BufWriter::with_capacity(BUFFER_SIZE, file),
            position: 0,
        }
    }
}

impl Write for FileOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let bytes_written = self.writer.write(buf)?;
        self.position += bytes_written as u64;
        Ok(bytes_written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl StorageOutput for FileOutput {
    fn position(&self) -> u64 {
        self.position
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CanticleError::storage(format!("Failed to flush: {e}")))?;

        self.writer
            .get_ref()
            .sync_all()
            .map_err(|e| CanticleError::storage(format!("Failed to sync: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();

        let mut output = storage.create_output("test.dat").unwrap();
        output.write_all(b"hello world").unwrap();
        assert_eq!(output.position(), 11);
        output.finish().unwrap();

        assert!(storage.file_exists("test.dat"));
        assert_eq!(storage.file_size("test.dat").unwrap(), 11);

        let mut input = storage.open_input("test.dat").unwrap();
        assert_eq!(input.size().unwrap(), 11);
        let mut contents = String::new();
        input.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "hello world");
    }

    #[test]
    fn test_file_storage_seek() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();

        let mut output = storage.create_output("seek.dat").unwrap();
        output.write_all(b"0123456789").unwrap();
        output.finish().unwrap();

        let mut input = storage.open_input("seek.dat").unwrap();
        input.seek(SeekFrom::Start(4)).unwrap();
        let mut buf = [0u8; 3];
        input.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"456");
    }

    #[test]
    fn test_delete_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();

        assert!(storage.delete_file("no-such-file").is_ok());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();

        assert!(storage.open_input("no-such-file").is_err());
    }
}
