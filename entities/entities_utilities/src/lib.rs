//! Entities Layer: Utilities
//!
//! Provides the arbitrary precision integer used throughout the workspace:
//! - [`BigNumber`]: a malachite-backed integer with decimal parsing and
//!   formatting
//!
//! The byte-level representation lives in `infrastructure_bignum_encoding`;
//! this crate only knows about values.

pub mod big;

pub use big::{BigNumber, ParseBigNumberError};
