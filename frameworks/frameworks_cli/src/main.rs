//! `scalar-roundtrip` binary
//!
//! Writes a big number to a file as a serialized `Scalar` envelope and/or
//! reads it back and checks it. Exits 0 on success, 1 on any failure.

use std::io;
use std::process;

use clap::Parser;
use frameworks_cli::{run, CliArgs};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_logging();

    let args = CliArgs::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match run(&config) {
        Ok(outcome) => {
            if outcome.should_report() {
                println!("{}", outcome);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
