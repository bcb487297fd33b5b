//! Run Configuration Module
//!
//! The explicit configuration handed to [`run`](crate::run::run).

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use entities_utilities::BigNumber;
use usecases_io_operations::PayloadEncoding;

/// File used when neither `--path` nor `SCALAR_PATH` is given
pub const DEFAULT_PATH: &str = "serialized-rs.bin";

/// Value written and expected when `--value` is not given
pub const SAMPLE_VALUE: &str = "123400000000000000000000000000050000000000000000000000000006789";

/// What a run does with the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Read the file and compare it with the expected value
    Read,
    /// Serialize the value and write the file
    Write,
    /// Write, then read back and compare
    RoundTrip,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Read => "read",
            Mode::Write => "write",
            Mode::RoundTrip => "round-trip",
        };
        f.write_str(name)
    }
}

/// Complete description of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub path: PathBuf,
    /// Number written in write modes and expected in read modes
    pub value: BigNumber,
    pub encoding: PayloadEncoding,
}

impl RunConfig {
    /// Configuration for `mode` on `path` with the sample value and minimal encoding
    pub fn new(mode: Mode, path: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            path: path.into(),
            value: sample_value(),
            encoding: PayloadEncoding::Minimal,
        }
    }

    /// Replace the value
    pub fn with_value(mut self, value: BigNumber) -> Self {
        self.value = value;
        self
    }

    /// Replace the payload encoding
    pub fn with_encoding(mut self, encoding: PayloadEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// [`SAMPLE_VALUE`] as big-endian 64-bit words
const SAMPLE_WORDS: [u64; 4] = [
    0x4cca,
    0xc112_2960_7f51_a9e3,
    0x38c3_81f4_3878_a61c,
    0x12d6_77c0_8000_1a85,
];

/// The sample constant as a number
pub fn sample_value() -> BigNumber {
    BigNumber::from_words_be(&SAMPLE_WORDS)
}
