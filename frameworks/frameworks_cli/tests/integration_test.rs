//! Integration tests for frameworks_cli
//!
//! Drives complete runs against real files in a scratch directory.

use std::fs;
use std::process::Command;

use clap::Parser;
use entities_utilities::BigNumber;
use frameworks_cli::{run, CliArgs, Mode, RunConfig, RunError, RunOutcome, SAMPLE_VALUE};
use tempfile::TempDir;
use usecases_io_operations::RoundTripError;

#[test]
fn test_write_then_read_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("serialized-rs.bin");

    let outcome = run(&RunConfig::new(Mode::Write, &path)).unwrap();
    assert_eq!(
        outcome,
        RunOutcome::Written {
            path: path.clone(),
            bytes: 28,
        }
    );
    assert_eq!(&fs::read(&path).unwrap()[..2], &[0x0a, 0x1a]);

    let outcome = run(&RunConfig::new(Mode::Read, &path)).unwrap();
    match outcome {
        RunOutcome::Verified { value, .. } => assert_eq!(value.to_string(), SAMPLE_VALUE),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_round_trip_from_args() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n.bin");
    let args = CliArgs::parse_from([
        "scalar-roundtrip",
        "--path",
        path.to_str().unwrap(),
        "--value",
        "18446744073709551616",
    ]);

    let outcome = run(&args.into_config().unwrap()).unwrap();
    assert_eq!(
        outcome,
        RunOutcome::RoundTripped {
            path: path.clone(),
            bytes: 11,
            value: BigNumber::from_u128(1 << 64),
        }
    );
    assert!(outcome.to_string().starts_with("round-trip ok:"));
}

#[test]
fn test_width_too_small() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n.bin");
    let config = CliArgs::parse_from([
        "scalar-roundtrip",
        "--mode",
        "write",
        "--path",
        path.to_str().unwrap(),
        "--width",
        "8",
    ])
    .into_config()
    .unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err,
        RunError::RoundTrip(RoundTripError::Encode(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.bin");

    let err = run(&RunConfig::new(Mode::Read, &path)).unwrap_err();
    match err {
        RunError::RoundTrip(RoundTripError::Io(e)) => assert!(e.is_not_found()),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_read_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n.bin");
    run(&RunConfig::new(Mode::Write, &path).with_value(BigNumber::from_u64(7))).unwrap();

    let err = run(&RunConfig::new(Mode::Read, &path)).unwrap_err();
    assert!(matches!(
        err,
        RunError::RoundTrip(RoundTripError::Mismatch { .. })
    ));
    assert!(err.to_string().starts_with("round-trip mismatch"));
}

#[test]
fn test_read_garbage_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n.bin");
    fs::write(&path, [0x0a, 0x05, 0x01]).unwrap();

    let err = run(&RunConfig::new(Mode::Read, &path)).unwrap_err();
    assert!(matches!(
        err,
        RunError::RoundTrip(RoundTripError::MalformedEnvelope(_))
    ));
}

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scalar-roundtrip"));
    cmd.env_remove("RUST_LOG").env_remove("SCALAR_PATH");
    cmd
}

#[test]
fn test_binary_missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.bin");

    let output = binary()
        .args(["--mode", "read", "--path", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was {:?}", stderr);
    assert!(stderr.contains("absent.bin"));
}

#[test]
fn test_binary_invalid_value_exits_1() {
    let output = binary().args(["--value", "12x"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn test_binary_round_trip_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n.bin");

    let output = binary()
        .args(["--path", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("round-trip ok:"));
    assert!(stdout.contains(SAMPLE_VALUE));
    assert_eq!(fs::read(&path).unwrap().len(), 28);
}

#[test]
fn test_binary_write_is_silent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n.bin");

    let output = binary()
        .args(["--mode", "write", "--path", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(path.exists());
}
