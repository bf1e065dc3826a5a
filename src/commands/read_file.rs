//! `read_file`: print a text file between header and footer lines.

use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::ports::FileSystem;

/// Prints the contents of `path` on `out`, or reports why it cannot.
///
/// # Errors
///
/// Returns [`Error::Read`] if the path is missing, is not a regular file, or
/// cannot be read as UTF-8 (after reporting the failure on `out`), or an I/O
/// error if `out` fails.
pub fn run(fs: &dyn FileSystem, path: &Path, out: &mut dyn Write) -> Result<()> {
    let shown = path.display();
    if !fs.exists(path) {
        writeln!(out, "Error: file '{shown}' does not exist")?;
        return Err(read_error(path, "no such file"));
    }
    if !fs.is_file(path) {
        writeln!(out, "Error: '{shown}' is not a file")?;
        return Err(read_error(path, "not a regular file"));
    }

    match fs.read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(path = %shown, len = contents.len(), "file read");
            write!(
                out,
                "=== Contents of file: {shown} ===\n\n{contents}\n\n=== End of file ===\n"
            )?;
            Ok(())
        }
        Err(e) => {
            tracing::error!(path = %shown, error = %e, "file read failed");
            match e.downcast_ref::<std::io::Error>().map(std::io::Error::kind) {
                Some(ErrorKind::InvalidData) => {
                    writeln!(out, "Error: cannot decode file '{shown}'")?;
                    writeln!(out, "The file does not appear to be UTF-8 text")?;
                }
                Some(ErrorKind::PermissionDenied) => {
                    writeln!(out, "Error: insufficient permissions to read '{shown}'")?;
                }
                _ => writeln!(out, "Error reading file: {e}")?,
            }
            Err(read_error(path, &e.to_string()))
        }
    }
}

fn read_error(path: &Path, message: &str) -> Error {
    Error::Read { path: path.display().to_string(), message: message.to_string() }
}
