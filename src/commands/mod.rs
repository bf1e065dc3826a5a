//! Command handlers and the context lifecycle around them.

pub mod generate;
pub mod read_file;
pub mod write_output;

use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Result;

/// Builds the context for `settings`, runs `handler`, then finishes any
/// recording session.
///
/// The session is finished even when the handler fails.
///
/// # Errors
///
/// Returns the handler's error, or a cassette error if wiring or finishing
/// the recording fails. When both the handler and the finish fail, the
/// handler's error wins and the finish error is logged.
pub fn dispatch<T>(
    settings: &Settings,
    handler: impl FnOnce(ServiceContext) -> Result<T>,
) -> Result<T> {
    let (ctx, session) = ServiceContext::for_mode(&settings.mode)?;

    // The handler consumes the context, which releases the recorder handles.
    let result = handler(ctx);

    let finished = session.map_or(Ok(()), finish_recording);
    match (result, finished) {
        (result, Ok(())) => result,
        (Ok(_), Err(finish_err)) => Err(finish_err),
        // The handler's failure is the one worth reporting.
        (Err(err), Err(finish_err)) => {
            tracing::error!(error = %finish_err, "failed to save recording");
            Err(err)
        }
    }
}

fn finish_recording(session: RecordingSession) -> Result<()> {
    let output_dir = session.finish()?;
    tracing::info!(dir = %output_dir.display(), "recording saved");
    Ok(())
}
