//! Environment-driven settings.

use std::path::PathBuf;

/// Tracing filter directive.
pub const LOG_ENV: &str = "IDGEN_LOG";
/// Directory to record port cassettes into.
pub const RECORD_ENV: &str = "IDGEN_RECORD";
/// Cassette file to replay port traffic from.
pub const REPLAY_ENV: &str = "IDGEN_REPLAY";

/// Filter used when `IDGEN_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How the service context wires its ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortMode {
    /// Real OS entropy and disk.
    Live,
    /// Live ports, with every interaction recorded under the directory.
    Record(PathBuf),
    /// Ports served from the cassette file.
    Replay(PathBuf),
}

/// Settings for one program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Tracing filter directive.
    pub log_filter: String,
    /// Port wiring.
    pub mode: PortMode,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// Call [`load_dotenv`] first to pick up a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// Replay wins over record when both are set. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mode = if let Some(path) = get(REPLAY_ENV) {
            PortMode::Replay(PathBuf::from(path))
        } else if let Some(dir) = get(RECORD_ENV) {
            PortMode::Record(PathBuf::from(dir))
        } else {
            PortMode::Live
        };
        Self { log_filter: get(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.into()), mode }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.into(), mode: PortMode::Live }
    }
}

/// Loads a `.env` file from the working directory or its parents, if any.
///
/// Runs before the subscriber exists, so a missing file is silently skipped.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
