//! File I/O Module
//!
//! Whole-file storage for serialized envelopes.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use log::{debug, info};
use usecases_io_operations::{BufferStore, StoreError, StoreErrorKind};

/// Stores each buffer as the complete content of a file
///
/// Writes truncate existing files; nothing is done to make them atomic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    /// Create a file store
    pub fn new() -> Self {
        Self
    }
}

fn store_error(operation: &'static str, path: &Path, err: io::Error) -> StoreError {
    let kind = match err.kind() {
        ErrorKind::NotFound => StoreErrorKind::NotFound,
        ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
        _ => StoreErrorKind::Other,
    };
    StoreError::new(kind, operation, path, err.to_string())
}

impl BufferStore for FileStore {
    fn write_buffer(&self, path: &Path, buf: &[u8]) -> Result<(), StoreError> {
        if path.exists() {
            info!("File {} exists, replacing", path.display());
        }
        fs::write(path, buf).map_err(|err| store_error("write", path, err))?;
        debug!("wrote {} bytes to {}", buf.len(), path.display());
        Ok(())
    }

    fn read_buffer(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        let buf = fs::read(path).map_err(|err| store_error("read", path, err))?;
        debug!("read {} bytes from {}", buf.len(), path.display());
        Ok(buf)
    }
}
