//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for the given verbosity: `debug` when verbose, `info` otherwise
#[must_use]
pub fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber, writing to stderr so stdout stays usable
/// for command output
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter_for(verbose))
        .init();
}
