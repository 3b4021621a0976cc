//! Logging setup for the CLI

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(log_level: &str, debug: bool) -> String {
    if debug {
        "debug".to_string()
    } else {
        log_level.to_string()
    }
}

/// Initialize stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise `--debug` or the configured level
/// applies. Calling this more than once is harmless.
pub fn init(log_level: &str, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level, debug)));

    // Ignore the error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
