//! Use Cases Layer: I/O Operations
//!
//! Provides the scalar persistence workflows:
//! - Packing a big number into a serialized envelope and back
//! - Writing a number to storage, reading it back, verifying it
//! - The [`BufferStore`] port that storage adapters implement
//!
//! Depends on the Entities and Infrastructure layers. Concrete storage lives
//! in `adapters_io_operations`.

pub mod error;
pub mod round_trip;
pub mod scalar_codec;
pub mod store;

pub use error::RoundTripError;
pub use round_trip::{read_number, verify_number, write_number};
pub use scalar_codec::{pack_number, unpack_number, PayloadEncoding};
pub use store::{BufferStore, StoreError, StoreErrorKind};
