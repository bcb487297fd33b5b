//! Codec Facades
//!
//! Integer and envelope encoding entry points.

use entities_data_handling::Scalar;
use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::{BignumCodec, EncodeError as IntegerEncodeError};
use infrastructure_external_format::{
    decode_scalar, encode_scalar, DecodeError, EncodeError as EnvelopeEncodeError,
};

/// Minimal big-endian bytes of a non-negative integer (`[0x00]` for zero)
pub fn encode_integer(value: &BigNumber) -> Result<Vec<u8>, IntegerEncodeError> {
    BignumCodec::encode(value)
}

/// Non-negative integer from big-endian bytes; the empty slice is zero
pub fn decode_integer(bytes: &[u8]) -> BigNumber {
    BignumCodec::decode(bytes)
}

/// Serialize an envelope to its wire form
pub fn serialize_envelope(scalar: &Scalar) -> Result<Vec<u8>, EnvelopeEncodeError> {
    encode_scalar(scalar)
}

/// Parse an envelope from its wire form
pub fn deserialize_envelope(buf: &[u8]) -> Result<Scalar, DecodeError> {
    decode_scalar(buf)
}
