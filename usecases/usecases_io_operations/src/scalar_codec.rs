//! Scalar Codec Module
//!
//! Composes the number codec and the envelope codec: a big number becomes
//! the `data` of a [`Scalar`] which is then serialized, and the reverse.

use entities_data_handling::Scalar;
use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_external_format::{decode_scalar, encode_scalar};

use crate::error::RoundTripError;

/// Layout of the number inside the envelope payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadEncoding {
    /// Shortest big-endian form
    #[default]
    Minimal,
    /// Big-endian left-padded to exactly this many bytes
    Fixed(usize),
}

/// Encode `value` and wrap it in a serialized envelope
pub fn pack_number(value: &BigNumber, encoding: PayloadEncoding) -> Result<Vec<u8>, RoundTripError> {
    let payload = match encoding {
        PayloadEncoding::Minimal => BignumCodec::encode(value)?,
        PayloadEncoding::Fixed(width) => BignumCodec::encode_fixed(value, width)?,
    };
    let scalar = Scalar::new(payload);
    Ok(encode_scalar(&scalar)?)
}

/// Parse a serialized envelope and decode its payload
pub fn unpack_number(buf: &[u8]) -> Result<BigNumber, RoundTripError> {
    let scalar = decode_scalar(buf)?;
    Ok(BignumCodec::decode(scalar.data()))
}
