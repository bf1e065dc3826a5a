//! Live filesystem adapter using `std::fs`.

use std::io::Write;
use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Permission bits for newly created files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        let mut file = options.open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_then_overwrites() {
        let dir = std::env::temp_dir().join("idgen_live_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");
        let _ = std::fs::remove_file(&path);

        let fs = LiveFileSystem;
        assert!(!fs.exists(&path));
        fs.write(&path, "first version, longer").unwrap();
        assert!(fs.exists(&path));
        fs.write(&path, "second").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "second");
        assert!(fs.is_file(&path));
        assert!(!fs.is_file(&dir));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_owner_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir().join("idgen_live_fs_mode_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");
        let _ = std::fs::remove_file(&path);

        LiveFileSystem.write(&path, "data").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & 0o022, 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_rejects_non_utf8_contents() {
        let dir = std::env::temp_dir().join("idgen_live_fs_utf8_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = LiveFileSystem.read_to_string(&path).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().expect("io error");
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let path = std::env::temp_dir().join("idgen_no_such_dir").join("nested").join("out.txt");
        assert!(LiveFileSystem.write(&path, "data").is_err());
    }
}
