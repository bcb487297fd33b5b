//! Storage Facades
//!
//! Whole-file persistence entry points backed by [`FileStore`].

use std::path::Path;

use adapters_io_operations::FileStore;
use usecases_io_operations::{BufferStore, StoreError};

/// Persist `buf` as the complete content of the file at `path`
pub fn write_buffer<P: AsRef<Path>>(path: P, buf: &[u8]) -> Result<(), StoreError> {
    FileStore.write_buffer(path.as_ref(), buf)
}

/// Return the complete content of the file at `path`
pub fn read_buffer<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, StoreError> {
    FileStore.read_buffer(path.as_ref())
}
