//! Bignum Codec Module
//!
//! Converts between [`BigNumber`] values and their big-endian byte form.

use entities_utilities::BigNumber;
use log::debug;

use crate::common::{be_bytes_to_integer, integer_to_be_bytes, significant_be_bytes, EncodeError};

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Encode a non-negative big number as minimal big-endian bytes
    ///
    /// The result never starts with a zero byte, except for the value zero,
    /// which encodes as `[0x00]`.
    ///
    /// # Returns
    /// * `Ok(bytes)` - Encoded bytes
    /// * `Err(EncodeError::NegativeValue)` - `value` is negative
    pub fn encode(value: &BigNumber) -> Result<Vec<u8>, EncodeError> {
        let bytes = integer_to_be_bytes(value.as_integer())?;
        debug!(
            "encoded {}-bit integer into {} bytes",
            value.bit_length(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Encode a non-negative big number left-padded to exactly `width` bytes
    ///
    /// This is the fixed-width layout some writers of the contract use (for
    /// example a 32-byte field). The plain [`decode`](Self::decode) reads it
    /// back since leading zeros are ignored.
    ///
    /// # Returns
    /// * `Ok(bytes)` - `width` bytes
    /// * `Err(EncodeError::ValueTooLarge)` - the value needs more than `width` bytes
    /// * `Err(EncodeError::NegativeValue)` - `value` is negative
    pub fn encode_fixed(value: &BigNumber, width: usize) -> Result<Vec<u8>, EncodeError> {
        let significant = significant_be_bytes(value.as_integer())?;
        if significant.len() > width {
            return Err(EncodeError::ValueTooLarge {
                required: significant.len(),
                width,
            });
        }

        let mut bytes = vec![0u8; width - significant.len()];
        bytes.extend_from_slice(&significant);
        debug!(
            "encoded {}-bit integer into fixed {}-byte field",
            value.bit_length(),
            width
        );
        Ok(bytes)
    }

    /// Decode big-endian bytes into a non-negative big number
    ///
    /// Total: the empty slice decodes to zero and leading zero bytes are
    /// skipped.
    pub fn decode(data: &[u8]) -> BigNumber {
        BigNumber::from_integer(be_bytes_to_integer(data))
    }

    /// Length of the minimal encoding of `value` without producing it
    pub fn encoded_len(value: &BigNumber) -> usize {
        let bits = value.bit_length();
        if bits == 0 {
            1
        } else {
            bits.div_ceil(8) as usize
        }
    }
}
