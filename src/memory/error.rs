// Sun Oct 18 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Failed opening or reading file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Short read on {}: expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

impl MemoryError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::FileAccess { path, .. } | Self::ShortRead { path, .. } => path,
        }
    }
}
