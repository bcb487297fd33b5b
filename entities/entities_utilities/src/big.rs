//! Big Number Operations
//!
//! Provides the arbitrary precision integer carried by a scalar envelope.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. The wrapper only exposes the capabilities the data contract
//! needs: parsing from decimal, formatting, sign inspection, equality and
//! access to the underlying `Integer` for the byte codec.

use std::fmt;
use std::str::FromStr;

use malachite::base::num::basic::traits::Zero;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Integer;
use thiserror::Error;

/// Error returned when a string is not a base-10 integer literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal integer literal: {input:?}")]
pub struct ParseBigNumberError {
    input: String,
}

impl ParseBigNumberError {
    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Big number representation using malachite's Integer
///
/// The type itself admits negative values so that callers can detect and
/// reject them at the codec boundary instead of silently dropping the sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u128
    pub fn from_u128(value: u128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Build a non-negative number from 64-bit words, most significant first
    pub fn from_words_be(words: &[u64]) -> Self {
        let value = words
            .iter()
            .fold(Integer::ZERO, |acc, &word| (acc << 64u64) + Integer::from(word));
        Self { value }
    }

    /// Parse a base-10 literal such as `"123400000000000000000000"`
    ///
    /// Surrounding whitespace is ignored. An optional leading `-` is
    /// accepted; everything else must be ASCII digits.
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseBigNumberError> {
        let trimmed = s.trim();
        Integer::from_str(trimmed)
            .map(|value| Self { value })
            .map_err(|_| ParseBigNumberError {
                input: s.to_string(),
            })
    }

    /// Format as a base-10 string
    pub fn to_decimal_string(&self) -> String {
        self.value.to_string()
    }

    /// Returns true if the value is below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Number of significant bits in the magnitude (0 for zero)
    pub fn bit_length(&self) -> u64 {
        (&self.value).significant_bits()
    }

    /// Get the internal Integer value (for the byte codec)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for the byte codec)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for BigNumber {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
