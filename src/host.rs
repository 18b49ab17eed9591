//! Process setup for the binary: logging, config and session storage

use std::path::PathBuf;

use anyhow::Context;
use ensemble_toasts_config::{CONFIG_PATH_ENV, ToastsConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::*;

/// Install the global tracing subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG`. With the `systemd` feature
/// they are also sent to the journal when it is reachable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "systemd")]
    let registry = registry.with(tracing_journald::layer().ok());

    registry.init();
}

/// Load the config named by `ENSEMBLE_TOASTS_CONFIG`, or the defaults.
pub fn load_config() -> anyhow::Result<ToastsConfig> {
    let Some(path) = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) else {
        return Ok(ToastsConfig::default());
    };
    ToastsConfig::load(&path).with_context(|| format!("loading {}", path.display()))
}

/// Where the binary keeps its session store
pub fn session_path() -> PathBuf {
    std::env::var_os(SESSION_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(SESSION_FILE_NAME))
}
