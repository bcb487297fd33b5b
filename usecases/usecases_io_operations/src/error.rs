//! Round-trip error taxonomy
//!
//! Every failure of the write/read/verify workflows, with `From`
//! conversions from the lower layers so `?` carries them up.

use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::EncodeError as NumberEncodeError;
use infrastructure_external_format::{DecodeError, EncodeError as EnvelopeEncodeError};
use thiserror::Error;

use crate::store::StoreError;

/// Errors raised while persisting or verifying a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundTripError {
    /// Storage could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] StoreError),
    /// The number cannot be represented as envelope payload
    #[error("cannot encode number: {0}")]
    Encode(#[from] NumberEncodeError),
    /// The envelope cannot be serialized
    #[error("cannot serialize envelope: {0}")]
    Serialize(#[from] EnvelopeEncodeError),
    /// The stored buffer is not a valid envelope
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[from] DecodeError),
    /// The stored number differs from the expected one
    #[error("round-trip mismatch: want {expected}, got {actual}")]
    Mismatch {
        expected: BigNumber,
        actual: BigNumber,
    },
}
