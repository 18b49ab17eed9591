pub mod bridge;
pub mod sanitizer;
pub mod session;
pub mod severity;
pub mod severity_style;

pub use bridge::{BridgeKeys, ReloadBridge};
pub use sanitizer::escape_text;
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
pub use severity::Severity;
pub use severity_style::{ansi, severity_ansi, severity_class};

/// A user-facing toast message
///
/// Immutable once built. Toasts have no identity beyond their content and are
/// never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    /// Build a toast. Returns `None` for a blank message.
    pub fn new(message: impl Into<String>, severity: impl Into<Severity>) -> Option<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return None;
        }
        Some(Self {
            message,
            severity: severity.into(),
        })
    }

    /// Build a success toast, the default for completed actions.
    pub fn success(message: impl Into<String>) -> Option<Self> {
        Self::new(message, Severity::Success)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_new() {
        let n = Notification::new("Soubor byl vytvořen.", "success").unwrap();
        assert_eq!(n.message(), "Soubor byl vytvořen.");
        assert_eq!(n.severity(), Severity::Success);
    }

    #[test]
    fn test_notification_normalizes_severity() {
        let n = Notification::new("x", "banana").unwrap();
        assert_eq!(n.severity(), Severity::Info);
    }

    #[test]
    fn test_notification_rejects_blank() {
        assert!(Notification::new("", Severity::Danger).is_none());
        assert!(Notification::success(" \n\t").is_none());
    }

    #[test]
    fn test_duplicates_are_equal_but_distinct_values() {
        let a = Notification::success("Uloženo").unwrap();
        let b = a.clone();
        assert_eq!(a, b);
    }
}
