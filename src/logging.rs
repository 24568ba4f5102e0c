//! Diagnostic logging (`--debug`), written to stderr so it never mixes with
//! JSON/CSV output on stdout.

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. Without `--debug` only warnings
/// (e.g. unknown status codes) are emitted, unless `RUST_LOG` says otherwise.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
