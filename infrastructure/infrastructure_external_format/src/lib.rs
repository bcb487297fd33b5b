//! Infrastructure Layer: Envelope Wire Format
//!
//! Provides the binary encoding of the [`Scalar`](entities_data_handling::Scalar)
//! envelope.
//!
//! ## Overview
//!
//! The wire format is the protocol-buffers encoding of
//!
//! ```text
//! message Scalar {
//!     bytes data = 1;
//! }
//! ```
//!
//! and is produced by a `prost` message, so buffers written here can be read
//! by any protobuf runtime and vice versa. A non-empty payload is written as
//! the key byte `0x0A` (field 1, wire type 2), a varint length, and the
//! payload. An empty payload is omitted entirely, so the empty envelope
//! serializes to the empty buffer.
//!
//! ## Modules
//!
//! - **[`message`](message/index.html)**: The `prost` message type
//! - **[`encoding`](encoding/index.html)**: Envelope encoding
//! - **[`decoding`](decoding/index.html)**: Envelope decoding
//! - **[`size_calculation`](size_calculation/index.html)**: Exact encoded sizes
//!
//! ## Strictness
//!
//! There is no schema evolution: the decoder rejects any field other than
//! `data`, as well as truncated input and oversize lengths. Repeated `data`
//! fields follow protobuf merge rules and the last one wins.
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../../entities/entities_data_handling/index.html): Scalar type
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): Payload encoding

pub mod decoding;
pub mod encoding;
pub mod message;
pub mod size_calculation;

pub use decoding::{decode_scalar, DecodeError};
pub use encoding::{encode_scalar, EncodeError};
pub use message::ScalarMessage;
pub use size_calculation::encoded_len;

/// Field number of `Scalar.data`
pub const DATA_FIELD_NUMBER: u32 = 1;

/// Key byte preceding the `data` field: `(1 << 3) | 2`
pub const DATA_KEY: u8 = 0x0a;

/// Largest accepted payload: the 2 GiB protobuf message limit
pub const MAX_DATA_LEN: usize = i32::MAX as usize;
