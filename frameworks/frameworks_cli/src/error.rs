//! Top-level error type
//!
//! Everything `main` may have to report.

use entities_utilities::ParseBigNumberError;
use thiserror::Error;
use usecases_io_operations::RoundTripError;

/// Invalid command-line or environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("--value: {0}")]
    InvalidValue(#[from] ParseBigNumberError),
    #[error("--value must not be negative, got {0}")]
    NegativeValue(String),
}

/// Failure of a run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    RoundTrip(#[from] RoundTripError),
}
