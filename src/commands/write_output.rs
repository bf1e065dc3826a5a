//! `write_output`: write a fixed payload to `output.txt`.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ports::FileSystem;

/// File written in the current working directory.
pub const OUTPUT_FILE: &str = "output.txt";

/// Text written to [`OUTPUT_FILE`].
pub const PAYLOAD: &str = "Hello, this is a text file created by a Rust program.
This file contains basic content.
It was generated automatically.
";

/// Writes [`PAYLOAD`] to `path` and reports the outcome on `out`.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be written (after reporting
/// the failure on `out`), or an I/O error if `out` fails.
pub fn run(fs: &dyn FileSystem, path: &Path, out: &mut dyn Write) -> Result<()> {
    let existed = fs.exists(path);
    match fs.write(path, PAYLOAD) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), overwritten = existed, "payload written");
            writeln!(out, "File '{}' written successfully.", path.display())?;
            Ok(())
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "payload write failed");
            writeln!(out, "Error writing file '{}': {e}", path.display())?;
            Err(Error::Write { path: path.display().to_string(), message: e.to_string() })
        }
    }
}
