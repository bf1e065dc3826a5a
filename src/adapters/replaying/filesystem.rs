//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::FS_PORT;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
///
/// Nothing touches the real disk.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> Result<serde_json::Value, String> {
        let mut replayer = self.replayer.lock().map_err(|_| "replayer lock poisoned".to_string())?;
        replayer.next_interaction(FS_PORT, method).map(|i| i.output).map_err(|e| e.to_string())
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.next_output("read_to_string")?;
        replay_result::<String>(&output, FS_PORT, "read_to_string")?.map_err(Into::into)
    }

    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = self.next_output("write")?;
        replay_result::<()>(&output, FS_PORT, "write")?.map_err(Into::into)
    }

    fn exists(&self, _path: &Path) -> bool {
        // A gap in the recording reads as "absent".
        self.next_output("exists").ok().and_then(|v| v.as_bool()).unwrap_or(false)
    }

    fn is_file(&self, _path: &Path) -> bool {
        self.next_output("is_file").ok().and_then(|v| v.as_bool()).unwrap_or(false)
    }
}
