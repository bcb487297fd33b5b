//! Adapters Layer: I/O Operations
//!
//! Provides I/O adapter operations:
//! - [`FileStore`]: whole-file storage implementing the
//!   [`BufferStore`](usecases_io_operations::BufferStore) port
//!
//! Depends on the Use Cases layer.

pub mod file_io;

pub use file_io::FileStore;
