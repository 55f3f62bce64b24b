// Sun Oct 18 2026 - Alex

use crate::memory::MemoryError;
use crate::pattern::SignatureMatcher;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A whole file held in memory. Loaded once and never modified.
#[derive(Debug)]
pub struct BinaryBuffer {
    data: Vec<u8>,
    path: PathBuf,
}

impl BinaryBuffer {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path_buf = path.as_ref().to_path_buf();
        let access = |source| MemoryError::FileAccess {
            path: path_buf.clone(),
            source,
        };

        let mut file = File::open(path.as_ref()).map_err(access)?;
        let expected = file.metadata().map_err(access)?.len();

        let mut data = Vec::with_capacity(expected as usize);
        file.read_to_end(&mut data).map_err(access)?;

        if (data.len() as u64) < expected {
            return Err(MemoryError::ShortRead {
                path: path_buf,
                expected,
                actual: data.len() as u64,
            });
        }

        log::debug!("Loaded {} from {}", crate::utils::format_bytes(data.len() as u64), path_buf.display());

        Ok(Self {
            data,
            path: path_buf,
        })
    }

    pub fn from_bytes(data: Vec<u8>, path: PathBuf) -> Self {
        Self { data, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn matcher(&self) -> SignatureMatcher<'_> {
        SignatureMatcher::new(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile_hex_pattern;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x41, 0x00, 0x41, 0xFF, 0x41]).unwrap();
        file.flush().unwrap();

        let buffer = BinaryBuffer::load(file.path()).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_slice(), &[0x41, 0x00, 0x41, 0xFF, 0x41]);
        assert_eq!(buffer.path(), file.path());

        let sig = compile_hex_pattern("41 ? 41").unwrap();
        assert_eq!(buffer.matcher().count(&sig), 2);
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let buffer = BinaryBuffer::load(file.path()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.bin");

        let err = BinaryBuffer::load(&missing).unwrap_err();
        assert!(matches!(err, MemoryError::FileAccess { .. }));
        assert_eq!(err.path(), &missing);
        assert!(err.to_string().contains("does-not-exist.bin"));
    }

    #[test]
    fn test_directory_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BinaryBuffer::load(dir.path()).is_err());
    }
}
