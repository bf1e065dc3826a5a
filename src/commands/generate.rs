//! `idgen`: print one identifier.

use std::io::Write;

use crate::context::ServiceContext;
use crate::error::Result;

/// Generates one identifier and writes it, newline-terminated, to `out`.
///
/// Nothing is written if generation fails.
///
/// # Errors
///
/// Returns a random-source error, or an I/O error if `out` fails.
pub fn run(ctx: ServiceContext, out: &mut dyn Write) -> Result<()> {
    let id = ctx.generator().generate()?;
    tracing::debug!(%id, "identifier ready");
    writeln!(out, "{id}")?;
    out.flush()?;
    Ok(())
}
