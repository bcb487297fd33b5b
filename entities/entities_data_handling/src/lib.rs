//! Entities Layer: Data Handling
//!
//! This crate provides the message envelope exchanged by the scalar data
//! contract.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer. As the
//! innermost layer, it has no dependencies on other crates in the workspace.
//!
//! ## Modules
//!
//! - **[`scalar`](scalar/index.html)**: The `Scalar` envelope, a message with a
//!   single byte-string field `data`. It is the unit that gets serialized,
//!   persisted and read back.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::Scalar;
//!
//! let s = Scalar::new(vec![0x01, 0x00]);
//! assert_eq!(s.data(), &[0x01, 0x00]);
//! assert!(!s.is_empty());
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_external_format`](../../infrastructure/infrastructure_external_format/index.html): Wire codec for `Scalar`

pub mod scalar;

pub use scalar::Scalar;
