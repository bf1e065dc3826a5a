//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveFileSystem, OsEntropy};
use crate::adapters::recording::{RecordingEntropy, RecordingFileSystem};
use crate::adapters::replaying::{ReplayingEntropy, ReplayingFileSystem};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::cassette::CassetteError;
use crate::config::PortMode;
use crate::generator::UuidV4Generator;
use crate::ports::{EntropySource, FileSystem};

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Secure random bytes.
    pub entropy: Box<dyn EntropySource>,
    /// Filesystem for the file reader and writer.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by OS entropy and the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { entropy: Box::new(OsEntropy), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn with_ports(entropy: Box<dyn EntropySource>, fs: Box<dyn FileSystem>) -> Self {
        Self { entropy, fs }
    }

    /// Creates a live context whose interactions are recorded under `root`.
    ///
    /// The context must be dropped before [`RecordingSession::finish`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(root: &Path) -> Result<(Self, RecordingSession), CassetteError> {
        let session = RecordingSession::new(root)?;
        let ctx = Self {
            entropy: Box::new(RecordingEntropy::new(
                Box::new(OsEntropy),
                Arc::clone(&session.entropy),
            )),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
        };
        tracing::info!(dir = %session.output_dir().display(), "recording port interactions");
        Ok((ctx, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// Works with per-port cassettes as well as combined ones; each port only
    /// consumes interactions carrying its own port name.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, CassetteError> {
        let cassette = Cassette::load(path)?;
        let count = cassette.interactions.len();
        tracing::info!(path = %path.display(), count, "replaying cassette");
        Ok(Self {
            entropy: Box::new(ReplayingEntropy::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Wires a context for the given mode.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording directory or replay cassette is unusable.
    pub fn for_mode(mode: &PortMode) -> Result<(Self, Option<RecordingSession>), CassetteError> {
        match mode {
            PortMode::Live => Ok((Self::live(), None)),
            PortMode::Record(root) => {
                let (ctx, session) = Self::recording_at(root)?;
                Ok((ctx, Some(session)))
            }
            PortMode::Replay(path) => Ok((Self::replaying(path)?, None)),
        }
    }

    /// Generator drawing from this context's entropy port.
    #[must_use]
    pub fn generator(self) -> UuidV4Generator {
        UuidV4Generator::new(self.entropy)
    }
}
