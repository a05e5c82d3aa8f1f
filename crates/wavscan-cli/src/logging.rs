//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `--debug` and `--verbose` pick the level; otherwise `RUST_LOG` is honoured
/// and everything below `error` stays quiet. Output goes to stderr.
pub fn init(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    // A subscriber may already be installed (tests); that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
