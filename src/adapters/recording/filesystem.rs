//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_interaction, record_result};
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::session::FS_PORT;
use crate::ports::FileSystem;

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: &'a str,
    contents: &'a str,
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.read_to_string(path);
        let input = PathInput { path: &path.display().to_string() };
        record_result(&self.recorder, FS_PORT, "read_to_string", &input, &result);
        result
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.write(path, contents);
        let input = WriteInput { path: &path.display().to_string(), contents };
        record_result(&self.recorder, FS_PORT, "write", &input, &result);
        result
    }

    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        let input = PathInput { path: &path.display().to_string() };
        record_interaction(&self.recorder, FS_PORT, "exists", &input, &result);
        result
    }

    fn is_file(&self, path: &Path) -> bool {
        let result = self.inner.is_file(path);
        let input = PathInput { path: &path.display().to_string() };
        record_interaction(&self.recorder, FS_PORT, "is_file", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[test]
    fn records_reads_writes_and_checks() {
        let dir = std::env::temp_dir().join("idgen_rec_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("fs.cassette.yaml");
        let target = dir.join("out.txt");
        let _ = std::fs::remove_file(&target);

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test")));
        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            assert!(!fs.exists(&target));
            fs.write(&target, "hello").unwrap();
            assert!(fs.is_file(&target));
            assert_eq!(fs.read_to_string(&target).unwrap(), "hello");
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&cassette_path).unwrap();
        assert_eq!(cassette.interactions[0].method, "exists");
        assert_eq!(cassette.interactions[0].output, json!(false));
        assert_eq!(cassette.interactions[1].method, "write");
        assert_eq!(cassette.interactions[1].input["contents"], json!("hello"));
        assert_eq!(cassette.interactions[1].output, json!({"ok": null}));
        assert_eq!(cassette.interactions[2].method, "is_file");
        assert_eq!(cassette.interactions[2].output, json!(true));
        assert_eq!(cassette.interactions[3].output, json!({"ok": "hello"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
