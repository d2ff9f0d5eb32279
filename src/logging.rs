//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with a document printed to stdout.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// with `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "commenti=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!crate::output::is_no_color())
        .try_init();
}
