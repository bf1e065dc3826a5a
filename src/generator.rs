//! Version-4 identifier generation.
//!
//! Generation requests exactly 16 bytes from an [`EntropySource`] in a single
//! call, stamps the version and variant fields, and hands back an
//! [`Identifier`]. A source failure is returned as-is; no identifier is
//! produced from partial or substitute bytes.

use crate::adapters::live::OsEntropy;
use crate::error::RandomSourceError;
use crate::identifier::Identifier;
use crate::ports::EntropySource;

/// Produces random (version 4) identifiers from an entropy source.
pub struct UuidV4Generator {
    entropy: Box<dyn EntropySource>,
}

impl UuidV4Generator {
    /// Creates a generator drawing from the given source.
    #[must_use]
    pub fn new(entropy: Box<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// Creates a generator backed by the operating system's CSPRNG.
    #[must_use]
    pub fn os() -> Self {
        Self::new(Box::new(OsEntropy))
    }

    /// Generates one identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the source cannot supply 16 bytes.
    pub fn generate(&self) -> Result<Identifier, RandomSourceError> {
        generate_from(self.entropy.as_ref())
    }

    /// Generates one identifier in canonical text form.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the source cannot supply 16 bytes.
    pub fn generate_string(&self) -> Result<String, RandomSourceError> {
        self.generate().map(|id| id.render())
    }
}

impl Default for UuidV4Generator {
    fn default() -> Self {
        Self::os()
    }
}

/// Generates one identifier from a borrowed source.
///
/// # Errors
///
/// Returns [`RandomSourceError`] if the source cannot supply 16 bytes.
pub fn generate_from(entropy: &dyn EntropySource) -> Result<Identifier, RandomSourceError> {
    let mut bytes = [0u8; 16];
    entropy.fill(&mut bytes)?;
    let id = Identifier::from_random_bytes(bytes);
    tracing::trace!(%id, "generated identifier");
    Ok(id)
}

/// Generates one identifier string using the operating system's CSPRNG.
///
/// # Errors
///
/// Returns [`RandomSourceError`] if the OS random source fails.
pub fn generate() -> Result<String, RandomSourceError> {
    UuidV4Generator::os().generate_string()
}
