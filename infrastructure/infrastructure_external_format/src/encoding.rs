//! Encoding Module
//!
//! Serializes the scalar envelope through its `prost` message.

use entities_data_handling::Scalar;
use log::debug;
use prost::Message;
use thiserror::Error;

use crate::message::ScalarMessage;
use crate::MAX_DATA_LEN;

/// Encoding error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload exceeds the message size limit
    #[error("payload of {len} bytes exceeds the {max} byte limit")]
    PayloadTooLarge { len: usize, max: usize },
}

/// Encode a scalar envelope into a new buffer
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes; empty when the payload is empty
/// * `Err(EncodeError::PayloadTooLarge)` - payload over [`MAX_DATA_LEN`]
pub fn encode_scalar(scalar: &Scalar) -> Result<Vec<u8>, EncodeError> {
    encode_scalar_limited(scalar, MAX_DATA_LEN)
}

pub(crate) fn encode_scalar_limited(scalar: &Scalar, max_len: usize) -> Result<Vec<u8>, EncodeError> {
    if scalar.len() > max_len {
        return Err(EncodeError::PayloadTooLarge {
            len: scalar.len(),
            max: max_len,
        });
    }

    let buf = ScalarMessage::from(scalar).encode_to_vec();
    debug!(
        "encoded scalar envelope: {} payload bytes, {} total",
        scalar.len(),
        buf.len()
    );
    Ok(buf)
}
