//! Buffer Store Port
//!
//! Storage abstraction for serialized envelopes. The file-backed
//! implementation lives in the adapters layer.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Broad category of a storage failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Nothing stored at the location
    NotFound,
    /// The location exists but may not be read or written
    PermissionDenied,
    /// Any other storage failure (missing parent, disk full, ...)
    Other,
}

/// Storage failure for a given location
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} {path:?} failed: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub operation: &'static str,
    pub path: PathBuf,
    pub message: String,
}

impl StoreError {
    /// Build an error for `operation` on `path`
    pub fn new(
        kind: StoreErrorKind,
        operation: &'static str,
        path: &Path,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            operation,
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// True when nothing was stored at the location
    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound
    }
}

/// Whole-buffer storage keyed by path
///
/// Writes replace any existing content; reads return everything stored.
pub trait BufferStore {
    /// Persist `buf` as the complete content at `path`
    fn write_buffer(&self, path: &Path, buf: &[u8]) -> Result<(), StoreError>;

    /// Return the complete content at `path`
    fn read_buffer(&self, path: &Path) -> Result<Vec<u8>, StoreError>;
}

impl<S: BufferStore + ?Sized> BufferStore for &S {
    fn write_buffer(&self, path: &Path, buf: &[u8]) -> Result<(), StoreError> {
        (**self).write_buffer(path, buf)
    }

    fn read_buffer(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        (**self).read_buffer(path)
    }
}
