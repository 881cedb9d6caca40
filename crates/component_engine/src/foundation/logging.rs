//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

use crate::config::LoggingConfig;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with the configured default filter.
///
/// `RUST_LOG` still takes precedence when set. Returns `false` if a logger
/// was already installed.
pub fn init_with_config(config: &LoggingConfig) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.level.as_str()))
        .try_init()
        .is_ok()
}
