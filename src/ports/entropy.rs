//! Entropy port for obtaining cryptographically secure random bytes.

use crate::error::RandomSourceError;

/// Supplies random bytes.
///
/// Production code is backed by the operating system's CSPRNG. Abstracting
/// it lets tests and cassette replay substitute fixed or failing sources.
pub trait EntropySource: Send + Sync {
    /// Fills the whole buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the source cannot supply
    /// `buf.len()` bytes. The buffer contents are unspecified on error.
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomSourceError>;
}
