//! Run Module
//!
//! Executes a [`RunConfig`] against a storage backend.

use std::fmt;
use std::path::PathBuf;

use adapters_io_operations::FileStore;
use entities_utilities::BigNumber;
use log::debug;
use usecases_io_operations::{verify_number, write_number, BufferStore};

use crate::config::{Mode, RunConfig};
use crate::error::RunError;

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The envelope was written
    Written { path: PathBuf, bytes: usize },
    /// The stored number matched the expected value
    Verified { path: PathBuf, value: BigNumber },
    /// The envelope was written and read back unchanged
    RoundTripped {
        path: PathBuf,
        bytes: usize,
        value: BigNumber,
    },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Written { path, bytes } => {
                write!(f, "wrote {} bytes to {}", bytes, path.display())
            }
            RunOutcome::Verified { path, value } => {
                write!(f, "{} holds {}", path.display(), value)
            }
            RunOutcome::RoundTripped { path, bytes, value } => write!(
                f,
                "round-trip ok: {} ({} bytes) holds {}",
                path.display(),
                bytes,
                value
            ),
        }
    }
}

impl RunOutcome {
    /// Whether the outcome is reported on stdout
    ///
    /// Write mode is silent on success.
    pub fn should_report(&self) -> bool {
        !matches!(self, RunOutcome::Written { .. })
    }
}

/// Execute `config` against the file system
pub fn run(config: &RunConfig) -> Result<RunOutcome, RunError> {
    run_with_store(&FileStore::new(), config)
}

/// Execute `config` against any [`BufferStore`]
pub fn run_with_store<S: BufferStore>(store: &S, config: &RunConfig) -> Result<RunOutcome, RunError> {
    debug!(
        "running mode {} on {} with {:?} encoding",
        config.mode,
        config.path.display(),
        config.encoding
    );

    let path = config.path.as_path();
    let outcome = match config.mode {
        Mode::Write => {
            let bytes = write_number(store, path, &config.value, config.encoding)?;
            RunOutcome::Written {
                path: config.path.clone(),
                bytes,
            }
        }
        Mode::Read => {
            let value = verify_number(store, path, &config.value)?;
            RunOutcome::Verified {
                path: config.path.clone(),
                value,
            }
        }
        Mode::RoundTrip => {
            let bytes = write_number(store, path, &config.value, config.encoding)?;
            let value = verify_number(store, path, &config.value)?;
            RunOutcome::RoundTripped {
                path: config.path.clone(),
                bytes,
                value,
            }
        }
    };
    Ok(outcome)
}
