//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing and turns the result into a
//! [`RunConfig`].

use std::path::PathBuf;

use clap::Parser;
use entities_utilities::BigNumber;
use usecases_io_operations::PayloadEncoding;

use crate::config::{sample_value, Mode, RunConfig};
use crate::env::determine_path;
use crate::error::ConfigError;

/// Scalar round-trip command-line arguments
#[derive(Parser, Debug)]
#[command(name = "scalar-roundtrip")]
#[command(about = "Write a big integer as a serialized Scalar envelope and read it back")]
pub struct CliArgs {
    /// What to do with the file
    #[arg(long, value_enum, default_value_t = Mode::RoundTrip)]
    pub mode: Mode,

    /// Envelope file (defaults to $SCALAR_PATH, then serialized-rs.bin)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Decimal value to write and expect (defaults to the sample constant)
    #[arg(long)]
    pub value: Option<String>,

    /// Left-pad the payload to this many bytes instead of the minimal encoding
    #[arg(long)]
    pub width: Option<usize>,
}

impl CliArgs {
    /// Validate the arguments and build the run configuration
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        let value = match self.value {
            Some(ref literal) => BigNumber::from_decimal_str(literal)?,
            None => sample_value(),
        };
        if value.is_negative() {
            return Err(ConfigError::NegativeValue(value.to_string()));
        }

        let encoding = match self.width {
            Some(width) => PayloadEncoding::Fixed(width),
            None => PayloadEncoding::Minimal,
        };

        Ok(RunConfig::new(self.mode, determine_path(self.path))
            .with_value(value)
            .with_encoding(encoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["scalar-roundtrip"]);
        assert_eq!(args.mode, Mode::RoundTrip);
        assert!(args.path.is_none());
        assert!(args.value.is_none());
        assert!(args.width.is_none());
    }

    #[test]
    fn test_mode_names() {
        let args = CliArgs::parse_from(["scalar-roundtrip", "--mode", "read"]);
        assert_eq!(args.mode, Mode::Read);

        let args = CliArgs::parse_from(["scalar-roundtrip", "--mode", "write"]);
        assert_eq!(args.mode, Mode::Write);

        let args = CliArgs::parse_from(["scalar-roundtrip", "--mode", "round-trip"]);
        assert_eq!(args.mode, Mode::RoundTrip);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(CliArgs::try_parse_from(["scalar-roundtrip", "--mode", "append"]).is_err());
    }

    #[test]
    fn test_into_config() {
        let args = CliArgs::parse_from([
            "scalar-roundtrip",
            "--mode",
            "write",
            "--path",
            "out.bin",
            "--value",
            "99",
            "--width",
            "32",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.mode, Mode::Write);
        assert_eq!(config.path, PathBuf::from("out.bin"));
        assert_eq!(config.value, BigNumber::from_u64(99));
        assert_eq!(config.encoding, PayloadEncoding::Fixed(32));
    }

    #[test]
    fn test_sample_value_by_default() {
        let config = CliArgs::parse_from(["scalar-roundtrip", "--path", "x.bin"])
            .into_config()
            .unwrap();
        assert_eq!(config.value, sample_value());
        assert_eq!(config.encoding, PayloadEncoding::Minimal);
    }

    #[test]
    fn test_invalid_value() {
        let err = CliArgs::parse_from(["scalar-roundtrip", "--path", "x", "--value", "1e9"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_negative_value() {
        let err = CliArgs::parse_from(["scalar-roundtrip", "--path", "x", "--value=-4"])
            .into_config()
            .unwrap_err();
        assert_eq!(err, ConfigError::NegativeValue("-4".to_string()));
    }
}
