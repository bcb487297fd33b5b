//! Frameworks Layer: Command-Line Entry Point
//!
//! Wires configuration, storage and the round-trip workflows together for
//! the `scalar-roundtrip` binary.
//!
//! ## Overview
//!
//! The binary writes a big number to a file as a serialized `Scalar`
//! envelope, reads it back, or both, and reports whether the value survived.
//! Everything it does is driven by a [`RunConfig`], so the same behavior is
//! reachable from tests without spawning a process.
//!
//! ## Modules
//!
//! - **[`config`](config/index.html)**: `RunConfig` and `Mode`
//! - **[`args`](args/index.html)**: Command-line parsing (clap)
//! - **[`env`](env/index.html)**: Environment-derived defaults
//! - **[`run`](run/index.html)**: Executes a configuration
//! - **[`error`](error/index.html)**: Top-level error type
//!
//! ## See Also
//!
//! - [`usecases_io_operations`](../../usecases/usecases_io_operations/index.html): Round-trip workflows
//! - [`adapters_io_operations`](../../adapters/adapters_io_operations/index.html): File storage

pub mod args;
pub mod config;
pub mod env;
pub mod error;
pub mod run;

pub use args::CliArgs;
pub use config::{Mode, RunConfig, DEFAULT_PATH, SAMPLE_VALUE};
pub use error::{ConfigError, RunError};
pub use run::{run, run_with_store, RunOutcome};
