use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::Instant;

use super::ToastDisplay;
use crate::rendering::{ContainerSpec, RenderedToast};
use crate::state::ToastId;

/// Something that happened on a [`RecordingDisplay`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    ContainerMounted(ContainerSpec),
    Shown(RenderedToast),
    Removed(ToastId),
}

/// Display that draws nothing and remembers every call, with timestamps
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    log: DisplayLog,
    available: bool,
}

/// Shared view of what a [`RecordingDisplay`] was asked to do
#[derive(Debug, Clone, Default)]
pub struct DisplayLog {
    events: Arc<Mutex<Vec<(Instant, DisplayEvent)>>>,
}

impl RecordingDisplay {
    pub fn new() -> (Self, DisplayLog) {
        let log = DisplayLog::default();
        (
            Self {
                log: log.clone(),
                available: true,
            },
            log,
        )
    }

    /// A display whose primitive is missing.
    pub fn unavailable() -> (Self, DisplayLog) {
        let (mut display, log) = Self::new();
        display.available = false;
        (display, log)
    }
}

impl ToastDisplay for RecordingDisplay {
    fn is_available(&self) -> bool {
        self.available
    }

    fn mount_container(&mut self, container: &ContainerSpec) {
        self.log.push(DisplayEvent::ContainerMounted(container.clone()));
    }

    fn show(&mut self, toast: &RenderedToast) {
        self.log.push(DisplayEvent::Shown(toast.clone()));
    }

    fn remove(&mut self, id: ToastId) {
        self.log.push(DisplayEvent::Removed(id));
    }
}

impl DisplayLog {
    fn lock(&self) -> MutexGuard<'_, Vec<(Instant, DisplayEvent)>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: DisplayEvent) {
        self.lock().push((Instant::now(), event));
    }

    pub fn events(&self) -> Vec<DisplayEvent> {
        self.lock().iter().map(|(_, e)| e.clone()).collect()
    }

    pub fn timed_events(&self) -> Vec<(Instant, DisplayEvent)> {
        self.lock().clone()
    }

    /// Every toast shown so far, in display order
    pub fn shown(&self) -> Vec<RenderedToast> {
        self.lock()
            .iter()
            .filter_map(|(_, e)| match e {
                DisplayEvent::Shown(toast) => Some(toast.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn shown_messages(&self) -> Vec<String> {
        self.shown().into_iter().map(|t| t.message).collect()
    }

    /// Toasts shown and not yet removed
    pub fn visible(&self) -> Vec<ToastId> {
        let mut visible = Vec::new();
        for (_, event) in self.lock().iter() {
            match event {
                DisplayEvent::Shown(toast) => visible.push(toast.id),
                DisplayEvent::Removed(id) => visible.retain(|v| v != id),
                DisplayEvent::ContainerMounted(_) => {}
            }
        }
        visible
    }

    /// Largest number of toasts that were on screen at the same time
    pub fn max_visible(&self) -> usize {
        let mut current = 0usize;
        let mut max = 0;
        for (_, event) in self.lock().iter() {
            match event {
                DisplayEvent::Shown(_) => current += 1,
                DisplayEvent::Removed(_) => current = current.saturating_sub(1),
                DisplayEvent::ContainerMounted(_) => {}
            }
            max = max.max(current);
        }
        max
    }

    pub fn container_mounts(&self) -> usize {
        self.lock()
            .iter()
            .filter(|(_, e)| matches!(e, DisplayEvent::ContainerMounted(_)))
            .count()
    }
}
