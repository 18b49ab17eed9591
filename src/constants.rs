// Constants module for ensemble-toasts
// Centralizes magic numbers for better maintainability

// ============================================================================
// Toast Queue Constants
// ============================================================================

/// Initial capacity for the pending toast queue
pub(crate) const INITIAL_PENDING_CAPACITY: usize = 8;

/// Prefix of rendered toast element ids
pub(crate) const TOAST_ELEMENT_PREFIX: &str = "toast_";

// ============================================================================
// Host Constants
// ============================================================================

/// Environment variable overriding the session store path
pub(crate) const SESSION_PATH_ENV: &str = "ENSEMBLE_TOASTS_SESSION";

/// File name of the session store inside the temp directory
pub(crate) const SESSION_FILE_NAME: &str = "ensemble-toasts.session.json";

/// Default log filter when RUST_LOG is unset
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";
