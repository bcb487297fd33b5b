//! Infrastructure Layer: Bignum Encoding
//!
//! Provides the byte codec for arbitrary precision integers carried inside a
//! scalar envelope.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure layer.
//! It turns a [`BigNumber`](entities_utilities::BigNumber) into the byte string
//! stored in the envelope's `data` field and back.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: Minimal and fixed-width
//!   big-endian encoding, and the total decoder.
//!
//! ## Encoding Rules
//!
//! - `encode(n)` is the shortest big-endian byte string for `n`, with no
//!   leading zero byte. Zero is `[0x00]`.
//! - `decode(bytes)` accepts any byte string; `[]` and `[0x00]` are both zero.
//! - Negative values are rejected with [`EncodeError::NegativeValue`].
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNumber type
//! - [`infrastructure_external_format`](../infrastructure_external_format/index.html): Envelope wire codec

mod common;

pub mod bignum_codec;

pub use bignum_codec::BignumCodec;

// Re-export error types for convenience
pub use common::EncodeError;

// Re-export byte conversion helpers for callers holding raw malachite integers
pub use common::{be_bytes_to_integer, integer_to_be_bytes};
