//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so they never mix with the tree on stdout.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

fn subscriber(quiet: bool, verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish()
}

/// Install the global subscriber. `RUST_LOG` overrides the flags.
pub fn init(quiet: bool, verbose: bool) {
    let _ = tracing::subscriber::set_global_default(subscriber(quiet, verbose));
}

/// Run `f` with a temporary subscriber, for work done before the final
/// verbosity is known
pub fn scoped<T>(quiet: bool, verbose: bool, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(subscriber(quiet, verbose), f)
}
