//! Logging initialization
//!
//! Logs go to stderr so the flashcard prompts on stdout stay readable.

use crate::config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the config level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.debug)
        .init();

    debug!(?config, "logging initialized");
}
