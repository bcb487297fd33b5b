//! API Facades Layer
//!
//! Flat entry points for the scalar data contract, one per operation:
//!
//! | Operation | Facade |
//! |-----------|--------|
//! | integer → bytes | [`encode_integer`] |
//! | bytes → integer | [`decode_integer`] |
//! | envelope → buffer | [`serialize_envelope`] |
//! | buffer → envelope | [`deserialize_envelope`] |
//! | persist buffer | [`write_buffer`] |
//! | load buffer | [`read_buffer`] |
//!
//! All facades call underlying modules from inner layers; callers that need
//! the composed workflows use [`write_number`], [`read_number`] and
//! [`verify_number`] with a [`FileStore`].

pub mod codec_facades;
pub mod storage_facades;

pub use codec_facades::*;
pub use storage_facades::*;

// Re-export the types that appear in facade signatures
pub use adapters_io_operations::FileStore;
pub use entities_data_handling::Scalar;
pub use entities_utilities::{BigNumber, ParseBigNumberError};
pub use infrastructure_bignum_encoding::EncodeError as IntegerEncodeError;
pub use infrastructure_external_format::{
    DecodeError as MalformedEnvelope, EncodeError as EnvelopeEncodeError,
};
pub use usecases_io_operations::{
    read_number, verify_number, write_number, PayloadEncoding, RoundTripError, StoreError,
    StoreErrorKind,
};
