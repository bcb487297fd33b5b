//! Decoding Module
//!
//! Parses the scalar envelope through its `prost` message. Every failure
//! here means the buffer is not a well-formed envelope.

use entities_data_handling::Scalar;
use log::debug;
use prost::encoding::{decode_key, decode_varint, skip_field, DecodeContext, WireType};
use prost::Message;
use thiserror::Error;

use crate::message::ScalarMessage;
use crate::{DATA_FIELD_NUMBER, MAX_DATA_LEN};

/// Decoding error types
///
/// Offsets are byte positions in the input where the offending element
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not a protobuf message: truncated input, bad varint, field 0 or an
    /// unassigned wire type
    #[error("invalid protobuf: {0}")]
    Protobuf(String),
    /// Well-formed key that does not name `data` as a byte string
    #[error("unexpected field {field_number} with wire type {wire_type} at offset {offset}")]
    UnexpectedField {
        field_number: u32,
        wire_type: u8,
        offset: usize,
    },
    /// Declared payload length above the message size limit
    #[error("declared length {len} at offset {offset} exceeds the {max} byte limit")]
    LengthTooLarge { len: u64, max: usize, offset: usize },
}

impl From<prost::DecodeError> for DecodeError {
    fn from(err: prost::DecodeError) -> Self {
        DecodeError::Protobuf(err.to_string())
    }
}

/// Decode a scalar envelope from `data`
///
/// The whole buffer must be consumed by well-formed `data` fields. The empty
/// buffer decodes to an envelope with an empty payload.
pub fn decode_scalar(data: &[u8]) -> Result<Scalar, DecodeError> {
    decode_scalar_limited(data, MAX_DATA_LEN)
}

pub(crate) fn decode_scalar_limited(data: &[u8], max_len: usize) -> Result<Scalar, DecodeError> {
    check_fields(data, max_len)?;
    // repeated occurrences overwrite, as protobuf merges them
    let message = ScalarMessage::decode(data)?;

    debug!(
        "decoded scalar envelope: {} bytes in, {} payload bytes",
        data.len(),
        message.data.len()
    );
    Ok(message.into())
}

/// Reject any field other than `data`, and `data` lengths over `max_len`
///
/// prost skips unknown fields silently; the envelope has no room for them.
fn check_fields(data: &[u8], max_len: usize) -> Result<(), DecodeError> {
    let mut buf = data;

    while !buf.is_empty() {
        let key_offset = data.len() - buf.len();
        let (field_number, wire_type) = decode_key(&mut buf)?;
        if field_number != DATA_FIELD_NUMBER || wire_type != WireType::LengthDelimited {
            return Err(DecodeError::UnexpectedField {
                field_number,
                wire_type: wire_type as u8,
                offset: key_offset,
            });
        }

        let len_offset = data.len() - buf.len();
        let mut peek = buf;
        let len = decode_varint(&mut peek)?;
        if len > max_len as u64 {
            return Err(DecodeError::LengthTooLarge {
                len,
                max: max_len,
                offset: len_offset,
            });
        }

        skip_field(wire_type, field_number, &mut buf, DecodeContext::default())?;
    }

    Ok(())
}
