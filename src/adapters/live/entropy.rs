//! Live adapter for the `EntropySource` port.

use crate::error::RandomSourceError;
use crate::ports::EntropySource;

/// Entropy backed by the operating system's secure random facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomSourceError> {
        getrandom::fill(buf).map_err(|e| {
            tracing::error!(error = %e, requested = buf.len(), "os random source failed");
            RandomSourceError::new(e.to_string())
        })
    }
}
