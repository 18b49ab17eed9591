use crate::Severity;

/// Bootstrap background utility class for a severity
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "text-bg-success",
        Severity::Danger => "text-bg-danger",
        Severity::Warning => "text-bg-warning",
        Severity::Info => "text-bg-info",
        Severity::Primary => "text-bg-primary",
        Severity::Secondary => "text-bg-secondary",
    }
}

/// ANSI SGR colour codes used by terminal displays
pub mod ansi {
    pub const GREEN: &str = "\x1b[42;30m";
    pub const RED: &str = "\x1b[41;97m";
    pub const YELLOW: &str = "\x1b[43;30m";
    pub const CYAN: &str = "\x1b[46;30m";
    pub const BLUE: &str = "\x1b[44;97m";
    pub const GRAY: &str = "\x1b[100;97m";
    pub const RESET: &str = "\x1b[0m";
}

/// Terminal colour for a severity, mirroring the Bootstrap palette
pub fn severity_ansi(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => ansi::GREEN,
        Severity::Danger => ansi::RED,
        Severity::Warning => ansi::YELLOW,
        Severity::Info => ansi::CYAN,
        Severity::Primary => ansi::BLUE,
        Severity::Secondary => ansi::GRAY,
    }
}
