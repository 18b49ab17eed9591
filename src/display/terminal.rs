use std::io::{self, IsTerminal, Write};

use ensemble_toasts_util::{ansi, severity_ansi};

use super::ToastDisplay;
use crate::rendering::{ContainerSpec, RenderedToast};
use crate::state::ToastId;

/// Writes toasts to stderr, one line per appearance
pub struct TerminalDisplay {
    color: bool,
    visible: Option<ToastId>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            visible: None,
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastDisplay for TerminalDisplay {
    fn mount_container(&mut self, container: &ContainerSpec) {
        tracing::debug!("toast container {} ready", container.id);
    }

    fn show(&mut self, toast: &RenderedToast) {
        self.visible = Some(toast.id);
        let mut err = io::stderr().lock();
        let result = if self.color {
            writeln!(
                err,
                "{} {} {} {}",
                severity_ansi(toast.severity),
                toast.severity,
                ansi::RESET,
                toast.message
            )
        } else {
            writeln!(err, "[{}] {}", toast.severity, toast.message)
        };
        if let Err(e) = result {
            tracing::warn!("Failed to draw toast {}: {}", toast.id, e);
        }
    }

    fn remove(&mut self, id: ToastId) {
        if self.visible.take_if(|v| *v == id).is_some() {
            tracing::trace!("toast {id} removed");
        }
    }
}
