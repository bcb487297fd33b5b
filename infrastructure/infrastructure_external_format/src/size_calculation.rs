//! Size Calculation Module
//!
//! Exact encoded size of the scalar envelope, computed without encoding.

use entities_data_handling::Scalar;
use prost::encoding::{encoded_len_varint, key_len};

use crate::DATA_FIELD_NUMBER;

/// Number of bytes [`encode_scalar`](crate::encode_scalar) produces for `scalar`
///
/// Zero for an empty payload, otherwise key + length varint + payload.
pub fn encoded_len(scalar: &Scalar) -> usize {
    let len = scalar.len();
    if len == 0 {
        return 0;
    }
    key_len(DATA_FIELD_NUMBER) + encoded_len_varint(len as u64) + len
}
