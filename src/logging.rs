//! Logging configuration
//!
//! Initializes tracing for the binary; the library itself never prints.

/// Initializes logging with the specified level, unless overridden by
/// the environment filter.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
