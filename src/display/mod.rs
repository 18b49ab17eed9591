//! Screens a toast can be shown on

pub mod recording;
pub mod terminal;

pub use recording::{DisplayEvent, DisplayLog, RecordingDisplay};
pub use terminal::TerminalDisplay;

use crate::rendering::{ContainerSpec, RenderedToast};
use crate::state::ToastId;

/// The primitive the toast controller draws with
///
/// Implementations never fail: a display that cannot draw reports itself
/// unavailable up front, and the page then drops every toast.
pub trait ToastDisplay: Send + 'static {
    fn is_available(&self) -> bool {
        true
    }

    /// Create the toast container. Called once, before the first `show`.
    fn mount_container(&mut self, container: &ContainerSpec);

    fn show(&mut self, toast: &RenderedToast);

    fn remove(&mut self, id: ToastId);
}

impl<D: ToastDisplay + ?Sized> ToastDisplay for Box<D> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn mount_container(&mut self, container: &ContainerSpec) {
        (**self).mount_container(container)
    }

    fn show(&mut self, toast: &RenderedToast) {
        (**self).show(toast)
    }

    fn remove(&mut self, id: ToastId) {
        (**self).remove(id)
    }
}
