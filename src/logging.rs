//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr `fmt` subscriber filtered by `directive`.
///
/// stdout stays reserved for program output. An unparsable directive falls
/// back to the default filter. Calling this twice is harmless.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
