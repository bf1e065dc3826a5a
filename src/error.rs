//! Error types shared across the crate.

use thiserror::Error;

/// The entropy source could not supply the requested bytes.
///
/// This is the only way identifier generation can fail. It is never
/// recovered by substituting weaker randomness.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("random source failed: {message}")]
pub struct RandomSourceError {
    message: String,
}

impl RandomSourceError {
    /// Creates an error carrying the underlying source's message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The message reported by the underlying source.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A string could not be parsed as a canonical identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseIdentifierError {
    /// Input was not 36 bytes long.
    #[error("expected 36 ASCII characters, found {0} bytes")]
    Length(usize),
    /// A hyphen was missing or misplaced.
    #[error("expected '-' at position {0}")]
    Hyphen(usize),
    /// A non-hexadecimal character was found.
    #[error("invalid hex digit {ch:?} at position {index}")]
    Digit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
}

/// Crate-level error for the command-line programs.
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line arguments were rejected.
    #[error("{0}")]
    Cli(#[from] clap::Error),

    /// Identifier generation failed.
    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),

    /// Writing the output file failed.
    #[error("failed to write {path}: {message}")]
    Write {
        /// Target path.
        path: String,
        /// Underlying failure.
        message: String,
    },

    /// Reading the input file failed.
    #[error("failed to read {path}: {message}")]
    Read {
        /// Source path.
        path: String,
        /// Underlying failure.
        message: String,
    },

    /// A cassette could not be loaded or saved.
    #[error("cassette error: {0}")]
    Cassette(#[from] crate::cassette::CassetteError),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_source_error_display_includes_message() {
        let err = RandomSourceError::new("device unavailable");
        assert_eq!(err.to_string(), "random source failed: device unavailable");
        assert_eq!(err.message(), "device unavailable");
    }

    #[test]
    fn random_source_error_is_transparent_in_crate_error() {
        let err: Error = RandomSourceError::new("exhausted").into();
        assert_eq!(err.to_string(), "random source failed: exhausted");
    }

    #[test]
    fn cassette_error_keeps_its_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error =
            crate::cassette::CassetteError::Read { path: "a.yaml".into(), source: io }.into();

        assert!(matches!(err, Error::Cassette(_)));
        let cassette = err.source().expect("cassette error as source");
        assert!(cassette.source().is_some_and(|io| io.to_string() == "gone"));
    }
}
