//! Round-Trip Workflows
//!
//! Write a number to a [`BufferStore`], read it back, and verify it against
//! an expected value.

use std::path::Path;

use entities_utilities::BigNumber;
use log::{info, warn};

use crate::error::RoundTripError;
use crate::scalar_codec::{pack_number, unpack_number, PayloadEncoding};
use crate::store::BufferStore;

/// Serialize `value` and store it at `path`
///
/// # Returns
/// * `Ok(len)` - number of bytes written
/// * `Err(RoundTripError)` - encoding or storage failure
pub fn write_number<S: BufferStore>(
    store: &S,
    path: &Path,
    value: &BigNumber,
    encoding: PayloadEncoding,
) -> Result<usize, RoundTripError> {
    let buf = pack_number(value, encoding)?;
    store.write_buffer(path, &buf)?;
    info!("wrote {} byte envelope to {}", buf.len(), path.display());
    Ok(buf.len())
}

/// Load the envelope stored at `path` and decode its number
pub fn read_number<S: BufferStore>(store: &S, path: &Path) -> Result<BigNumber, RoundTripError> {
    let buf = store.read_buffer(path)?;
    let value = unpack_number(&buf)?;
    info!("read {} byte envelope from {}", buf.len(), path.display());
    Ok(value)
}

/// Read the number stored at `path` and compare it with `expected`
///
/// # Returns
/// * `Ok(value)` - the stored number, equal to `expected`
/// * `Err(RoundTripError::Mismatch)` - the stored number differs
/// * `Err(RoundTripError)` - storage or format failure
pub fn verify_number<S: BufferStore>(
    store: &S,
    path: &Path,
    expected: &BigNumber,
) -> Result<BigNumber, RoundTripError> {
    let actual = read_number(store, path)?;
    if &actual != expected {
        warn!("stored number at {} differs from expected", path.display());
        return Err(RoundTripError::Mismatch {
            expected: expected.clone(),
            actual,
        });
    }
    Ok(actual)
}
