//! Cassette format for recording and replaying port interactions.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

use thiserror::Error;

/// Failures while loading, replaying or saving cassettes.
#[derive(Debug, Error)]
pub enum CassetteError {
    /// The cassette file could not be read.
    #[error("failed to read cassette file {path}: {source}")]
    Read {
        /// Cassette path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The cassette file is not valid YAML for a cassette.
    #[error("failed to parse cassette file {path}: {source}")]
    Parse {
        /// Cassette path.
        path: String,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },

    /// The cassette could not be written.
    #[error("failed to write cassette {path}: {message}")]
    Write {
        /// Cassette path.
        path: String,
        /// Underlying failure.
        message: String,
    },

    /// No recorded interaction is left for a port/method pair.
    #[error("cassette exhausted: no more interactions for {port}::{method} (consumed {consumed})")]
    Exhausted {
        /// Port requested.
        port: String,
        /// Method requested.
        method: String,
        /// How many interactions had already been served.
        consumed: usize,
    },

    /// A recorded output does not have the expected shape.
    #[error("malformed {port}::{method} output: {message}")]
    Malformed {
        /// Port requested.
        port: String,
        /// Method requested.
        method: String,
        /// What was wrong.
        message: String,
    },
}
