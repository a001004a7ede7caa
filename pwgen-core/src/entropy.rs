// File:    entropy.rs
// Date:    2026-08-28
//
// Description: Adapts the operating system's secure random generator into a bounded uniform integer source.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use rand::{rngs::OsRng, TryRngCore};
use thiserror::Error;

/// An error raised when the underlying secure entropy source fails.
///
/// This is always fatal to the caller; the library never falls back to a
/// non-cryptographic generator.
#[derive(Error, Debug)]
#[error("secure entropy source failure: {0}")]
pub struct EntropyError(#[from] std::io::Error);

/// A source of uniformly distributed bounded random integers.
///
/// Kept as a trait so tests can substitute a deterministic implementation
/// that still respects the same bounding contract.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the underlying randomness source
    /// fails to produce bytes.
    ///
    /// # Panics
    ///
    /// Implementations panic if `bound` is zero.
    fn uniform_int(&mut self, bound: u64) -> Result<u64, EntropyError>;
}

/// A [`RandomSource`] backed by the operating system's secure random device.
///
/// Each call draws fresh bytes; no generator state is retained between
/// calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn uniform_int(&mut self, bound: u64) -> Result<u64, EntropyError> {
        assert!(bound > 0, "uniform_int requires a positive bound");
        let mut buf = [0u8; 8];
        // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(std::io::Error::other)?;
        // Mask the sign bit so the value is non-negative as a 63-bit
        // integer, then reduce to the requested range.
        let value = u64::from_le_bytes(buf) & ((1 << 63) - 1);
        Ok(value % bound)
    }
}
