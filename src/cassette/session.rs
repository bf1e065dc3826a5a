//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use super::CassetteError;

/// Port name used for entropy interactions.
pub const ENTROPY_PORT: &str = "entropy";
/// Port name used for filesystem interactions.
pub const FS_PORT: &str = "fs";

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing `<port>.cassette.yaml` inside a
/// timestamped directory under the configured root.
pub struct RecordingSession {
    /// Recorder for entropy interactions.
    pub entropy: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session in `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(root: &Path) -> Result<Self, CassetteError> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.join(&timestamp);
        let write_err = |message: String| CassetteError::Write {
            path: output_dir.display().to_string(),
            message,
        };

        if output_dir.exists() {
            return Err(write_err("cassette directory already exists".into()));
        }
        std::fs::create_dir_all(&output_dir).map_err(|e| write_err(e.to_string()))?;

        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            entropy: make_recorder(ENTROPY_PORT),
            fs: make_recorder(FS_PORT),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Ports that saw no traffic produce no file. All recording adapters must
    /// have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, CassetteError> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), CassetteError> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| CassetteError::Write {
                    path: port.to_string(),
                    message: "recording adapter still has references".into(),
                })?
                .into_inner()
                .map_err(|e| CassetteError::Write {
                    path: port.to_string(),
                    message: format!("recorder lock poisoned: {e}"),
                })?;
            if !recorder.is_empty() {
                recorder.finish()?;
            }
            Ok(())
        }

        finish_one(self.entropy, ENTROPY_PORT)?;
        finish_one(self.fs, FS_PORT)?;
        Ok(self.output_dir)
    }
}
