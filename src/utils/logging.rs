//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging for the simulator.
///
/// `RUST_LOG` takes precedence over `default_level`. Output goes to stderr so
/// it never interleaves with shell output on stdout.
pub fn setup_logging(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
