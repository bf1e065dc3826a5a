//! CLI argument definitions.
//!
//! `idgen` and `write_output` take no arguments; their parsers exist for
//! `--help`, `--version` and rejecting anything else. `read_file` takes
//! exactly one path.

use std::path::PathBuf;

use clap::Parser;

/// Parser for the `idgen` program.
#[derive(Debug, Parser)]
#[command(name = "idgen", version, about = "Print a random RFC 4122 version-4 identifier")]
pub struct Cli {}

/// Parser for the `write_output` program.
#[derive(Debug, Parser)]
#[command(
    name = "write_output",
    version,
    about = "Write a fixed text payload to output.txt in the current directory"
)]
pub struct WriteOutputCli {}

/// Parser for the `read_file` program.
#[derive(Debug, Parser)]
#[command(name = "read_file", version, about = "Print the contents of a UTF-8 text file")]
pub struct ReadFileCli {
    /// File to print.
    pub path: PathBuf,
}
