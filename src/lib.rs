//! RFC 4122 version-4 identifier generation.
//!
//! The library core is [`generator::UuidV4Generator`], which turns 16 bytes
//! from an injectable [`ports::EntropySource`] into an
//! [`identifier::Identifier`]. The `idgen`, `write_output` and `read_file`
//! binaries are thin wrappers around [`run`], [`run_write_output`] and
//! [`run_read_file`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod logging;
pub mod ports;

use std::io::Write;
use std::path::Path;

use clap::Parser;

pub use error::{Error, RandomSourceError, Result};
pub use generator::{generate, UuidV4Generator};
pub use identifier::Identifier;

/// Run the `idgen` program with the provided arguments.
///
/// # Errors
///
/// Returns an error when argument parsing fails, the random source fails,
/// or `out` cannot be written.
pub fn run<I, T>(args: I, settings: &config::Settings, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    cli::Cli::try_parse_from(args)?;
    commands::dispatch(settings, |ctx| commands::generate::run(ctx, out))
}

/// Run the `write_output` program with the provided arguments.
///
/// # Errors
///
/// Returns an error when argument parsing fails or the file cannot be written.
pub fn run_write_output<I, T>(
    args: I,
    settings: &config::Settings,
    out: &mut dyn Write,
) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    cli::WriteOutputCli::try_parse_from(args)?;
    commands::dispatch(settings, |ctx| {
        commands::write_output::run(
            ctx.fs.as_ref(),
            Path::new(commands::write_output::OUTPUT_FILE),
            out,
        )
    })
}

/// Run the `read_file` program with the provided arguments.
///
/// # Errors
///
/// Returns an error when argument parsing fails or the file cannot be read.
pub fn run_read_file<I, T>(args: I, settings: &config::Settings, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::ReadFileCli::try_parse_from(args)?;
    commands::dispatch(settings, |ctx| commands::read_file::run(ctx.fs.as_ref(), &cli.path, out))
}
