//! Common Encoding/Decoding Utilities
//!
//! Provides the byte-level conversions between malachite integers and
//! big-endian magnitude bytes. Both bignum codec entry points are built on
//! these helpers.
//!
//! ## Encoding Format
//!
//! - Most significant byte first, 8 bits per byte
//! - No sign byte; negative values are rejected
//! - Zero is represented by the single byte `0x00`
//!
//! ## See Also
//!
//! - [`bignum_codec`](super::bignum_codec/index.html): Big number codec (uses these functions)

use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};
use thiserror::Error;

/// Bits per output digit
const BYTE_BITS: u64 = 8;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value is below zero
    #[error("cannot encode negative value {0}")]
    NegativeValue(String),
    /// The value does not fit the requested fixed width
    #[error("value needs {required} bytes but the fixed width is {width}")]
    ValueTooLarge { required: usize, width: usize },
}

/// Significant big-endian bytes of a non-negative integer
///
/// Returns an empty vector for zero. Callers decide how zero is
/// represented on the wire.
pub fn significant_be_bytes(value: &Integer) -> Result<Vec<u8>, EncodeError> {
    let magnitude =
        Natural::try_from(value).map_err(|_| EncodeError::NegativeValue(value.to_string()))?;
    Ok(PowerOf2Digits::<u8>::to_power_of_2_digits_desc(
        &magnitude, BYTE_BITS,
    ))
}

/// Extract the minimal big-endian bytes of a non-negative integer
///
/// # Returns
///
/// * `Ok(bytes)` - No leading zero byte; `[0x00]` for zero
/// * `Err(EncodeError::NegativeValue)` - The value is negative
pub fn integer_to_be_bytes(value: &Integer) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = significant_be_bytes(value)?;
    if bytes.is_empty() {
        bytes.push(0);
    }
    Ok(bytes)
}

/// Convert big-endian magnitude bytes to a malachite Integer
///
/// Every byte sequence is accepted. Leading zero bytes are ignored and the
/// empty sequence yields zero.
pub fn be_bytes_to_integer(bytes: &[u8]) -> Integer {
    // digits are u8, so each one is below 2^8 and the conversion cannot fail
    let magnitude =
        <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(BYTE_BITS, bytes.iter().copied())
            .unwrap_or(Natural::ZERO);
    Integer::from(magnitude)
}
