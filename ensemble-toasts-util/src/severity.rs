use std::fmt;

/// Severity of a toast, controlling its visual styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Severity {
    /// Completed action (default for `enqueue` and stashed toasts)
    #[default]
    Success,
    /// Failed action
    Danger,
    Warning,
    /// Fallback for anything unrecognized
    Info,
    Primary,
    Secondary,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Success,
        Severity::Danger,
        Severity::Warning,
        Severity::Info,
        Severity::Primary,
        Severity::Secondary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
        }
    }
}

impl From<&str> for Severity {
    /// Unknown values normalize to [`Severity::Info`].
    fn from(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            other => {
                tracing::trace!("unknown severity {:?}, using info", other);
                Self::Info
            }
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Severity> for &'static str {
    fn from(value: Severity) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_known_names() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from(severity.as_str()), severity);
        }
    }

    #[test]
    fn test_severity_unknown_normalizes_to_info() {
        assert_eq!(Severity::from("banana"), Severity::Info);
        assert_eq!(Severity::from(""), Severity::Info);
        // Matching is exact, like the class names it maps to
        assert_eq!(Severity::from("Success"), Severity::Info);
    }

    #[test]
    fn test_severity_default() {
        let severity: Severity = Default::default();
        assert_eq!(severity, Severity::Success);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Danger.to_string(), "danger");
        assert_eq!(format!("{}", Severity::Secondary), "secondary");
    }

    #[test]
    fn test_severity_serde_is_lossy() {
        let parsed: Vec<Severity> =
            serde_json::from_str(r#"["warning", "banana", "primary"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Severity::Warning, Severity::Info, Severity::Primary]
        );
        assert_eq!(serde_json::to_string(&Severity::Danger).unwrap(), r#""danger""#);
    }
}
