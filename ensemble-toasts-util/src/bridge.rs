//! Hand a toast across a page reload
//!
//! An action that reloads or navigates the page stashes its toast first; the
//! next page load takes it out again and shows it. At most one toast is
//! stashed at a time and a later stash replaces an earlier unconsumed one.

use ensemble_toasts_config::ToastsConfig;
use tracing::{debug, warn};

use crate::session::{SessionError, SessionStore};
use crate::{Notification, Severity};

/// Storage key names every participating page must agree on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeKeys {
    pub message: String,
    pub severity: String,
}

impl BridgeKeys {
    pub fn from_config(config: &ToastsConfig) -> Self {
        Self {
            message: config.message_key.clone(),
            severity: config.severity_key.clone(),
        }
    }
}

impl Default for BridgeKeys {
    fn default() -> Self {
        Self::from_config(&ToastsConfig::default())
    }
}

/// Typed handoff over a [`SessionStore`]
#[derive(Debug)]
pub struct ReloadBridge<S> {
    store: S,
    keys: BridgeKeys,
}

impl<S: SessionStore> ReloadBridge<S> {
    pub fn new(store: S, keys: BridgeKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &BridgeKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to hand it to the next page load.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the stashed toast. `None` clears any pending stash.
    pub fn put(&mut self, stash: Option<Notification>) {
        let result = match &stash {
            Some(notification) => self.write(notification),
            None => self.clear(),
        };

        match result {
            Ok(()) => debug!(stashed = stash.is_some(), "reload bridge updated"),
            Err(err) => warn!("Failed to update stashed toast: {}", err),
        }
    }

    /// The message key decides whether a stash exists, so it is removed
    /// first and written last. A write that fails part way leaves either the
    /// previous pair or no stash at all, never a mixed pair.
    fn write(&mut self, notification: &Notification) -> Result<(), SessionError> {
        self.store.remove(&self.keys.message)?;
        self.store
            .set(&self.keys.severity, notification.severity().as_str())?;
        self.store.set(&self.keys.message, notification.message())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.store.remove(&self.keys.message)?;
        self.store.remove(&self.keys.severity)
    }

    /// Stash a toast to be shown by the next page load.
    ///
    /// Blank messages are ignored and leave any existing stash in place.
    pub fn stash_for_next_load(&mut self, message: &str, severity: Severity) {
        match Notification::new(message, severity) {
            Some(notification) => self.put(Some(notification)),
            None => debug!("ignoring blank toast stash"),
        }
    }

    /// Take the stashed toast out of the store.
    ///
    /// Both keys are removed before the toast is returned, so a second call,
    /// or a reload of the page that consumed it, finds nothing. A stash without
    /// a severity key is a success toast.
    pub fn take_and_clear(&mut self) -> Option<Notification> {
        let message = match self.store.get(&self.keys.message) {
            Ok(Some(message)) => message,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read stashed toast, discarding it: {}", err);
                self.put(None);
                return None;
            }
        };

        let severity = match self.store.get(&self.keys.severity) {
            Ok(severity) => severity
                .filter(|s| !s.is_empty())
                .map(Severity::from)
                .unwrap_or_default(),
            Err(err) => {
                warn!("Failed to read stashed toast severity: {}", err);
                Severity::default()
            }
        };

        // Only the message key has to go for a reload to find nothing
        if let Err(err) = self.store.remove(&self.keys.message) {
            warn!("Failed to clear stashed toast, not showing it: {}", err);
            return None;
        }
        if let Err(err) = self.store.remove(&self.keys.severity) {
            warn!("Failed to clear stashed toast severity: {}", err);
        }

        let notification = Notification::new(message, severity);
        if notification.is_none() {
            debug!("discarded blank stashed toast");
        }
        notification
    }
}
