//! Filesystem access for the router.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a file could not be loaded.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            _ => FileError::Other {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound(_))
    }
}

/// Reads a whole file into memory.
pub async fn read_all(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    tokio::fs::read(path)
        .await
        .map_err(|e| FileError::from_io(path, e))
}
