// Toast controller
// ================
//
// One controller exists per page load. It owns the toast queue and the
// display, and is the only code that touches either. Every request reaches it
// as a `Message` on one unbounded channel and is handled to completion before
// the next one is read, so the queue sees a strict sequence of inputs.
//
// Timers are plain tokio tasks that sleep and then post a message back onto
// the same channel. The visible-duration timer of the current toast is kept
// so an early dismissal can abort it; the queue additionally ignores
// timeouts for toasts that are no longer displayed.

use std::collections::HashMap;

use ensemble_toasts_config::ToastsConfig;
use ensemble_toasts_util::{Notification, Severity};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::display::ToastDisplay;
use crate::handlers::Message;
use crate::rendering::ToastRenderer;
use crate::state::{Effect, Input, Phase, ToastId, ToastQueue};

/// Cheap, cloneable way to post toasts to the page's controller
///
/// Every method returns immediately. If the controller is gone, or the page
/// has no display, requests are silently dropped.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    tx: Option<UnboundedSender<Message>>,
}

impl ToastHandle {
    /// A handle that drops everything, for pages that cannot show toasts.
    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub fn is_attached(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Queue a toast behind any already waiting.
    ///
    /// Unknown severities are shown as info; blank messages are dropped.
    pub fn enqueue(&self, message: &str, severity: impl Into<Severity>) {
        match Notification::new(message, severity) {
            Some(notification) => self.enqueue_notification(notification),
            None => tracing::debug!("dropping blank toast"),
        }
    }

    /// Queue a success toast.
    pub fn success(&self, message: &str) {
        self.enqueue(message, Severity::Success);
    }

    pub fn enqueue_notification(&self, notification: Notification) {
        self.send(Message::Enqueue(notification));
    }

    /// Close the toast with the given id, if it is still on screen.
    pub fn dismiss(&self, id: ToastId) {
        self.send(Message::Dismissed(id));
    }

    /// Close whatever toast is on screen.
    pub fn dismiss_current(&self) {
        self.send(Message::DismissCurrent);
    }

    pub(crate) fn shutdown(&self) {
        self.send(Message::Shutdown);
    }

    fn send(&self, message: Message) {
        let Some(tx) = &self.tx else {
            tracing::trace!("no toast display, dropping {:?}", message);
            return;
        };
        if tx.send(message).is_err() {
            tracing::trace!("toast controller gone");
        }
    }
}

/// Owner of the toast queue and the display for one page load
pub struct ToastApp<D> {
    queue: ToastQueue,
    display: D,
    renderer: ToastRenderer,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
    container_mounted: bool,
    timeouts: HashMap<ToastId, JoinHandle<()>>,
    cooldown: Option<JoinHandle<()>>,
}

impl<D: ToastDisplay> ToastApp<D> {
    /// Build the controller and the handle that feeds it.
    pub fn new(config: &ToastsConfig, display: D) -> (Self, ToastHandle) {
        let (tx, rx) = unbounded_channel();
        let handle = ToastHandle {
            tx: Some(tx.clone()),
        };
        let app = Self {
            queue: ToastQueue::new(config.visible_duration(), config.cooldown()),
            display,
            renderer: ToastRenderer::new(config),
            tx,
            rx,
            container_mounted: false,
            timeouts: HashMap::new(),
            cooldown: None,
        };
        (app, handle)
    }

    /// Process messages until the page shuts down.
    ///
    /// Returns the display so a host can inspect or reuse it.
    pub async fn run(mut self) -> D {
        while let Some(message) = self.rx.recv().await {
            if !self.update(message) {
                break;
            }
        }
        self.teardown();
        self.display
    }

    /// Handle one message. Returns `false` once the page is shutting down.
    fn update(&mut self, message: Message) -> bool {
        let input = match message {
            Message::Enqueue(notification) => Input::Enqueue(notification),
            Message::Timeout(id) => {
                self.timeouts.remove(&id);
                Input::Timeout(id)
            }
            Message::Dismissed(id) => Input::UserDismiss(id),
            Message::DismissCurrent => match self.queue.displayed() {
                Some(id) => Input::UserDismiss(id),
                None => return true,
            },
            Message::CooldownElapsed => {
                self.cooldown = None;
                Input::CooldownElapsed
            }
            Message::Shutdown => return false,
        };

        for effect in self.queue.update(input) {
            self.apply(effect);
        }
        true
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Show { id, notification } => {
                if !self.container_mounted {
                    self.display.mount_container(self.renderer.container());
                    self.container_mounted = true;
                }
                let toast = self.renderer.render(id, &notification);
                self.display.show(&toast);
            }
            Effect::ArmTimeout { id, after } => {
                let handle = self.post_after(after, Message::Timeout(id));
                self.timeouts.insert(id, handle);
            }
            Effect::CancelTimeout(id) => {
                if let Some(handle) = self.timeouts.remove(&id) {
                    handle.abort();
                }
            }
            Effect::Remove(id) => self.display.remove(id),
            Effect::ArmCooldown { after } => {
                self.cooldown = Some(self.post_after(after, Message::CooldownElapsed));
            }
        }
    }

    fn post_after(&self, after: Duration, message: Message) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            _ = tx.send(message);
        })
    }

    /// Stop all timers and clear the screen. Pending toasts are lost.
    fn teardown(&mut self) {
        for (_, handle) in self.timeouts.drain() {
            handle.abort();
        }
        if let Some(handle) = self.cooldown.take() {
            handle.abort();
        }
        if let Phase::Displaying(id) = self.queue.phase() {
            self.display.remove(id);
        }
        if self.queue.pending_count() > 0 {
            tracing::debug!(
                "page unloading with {} undelivered toasts",
                self.queue.pending_count()
            );
        }
    }
}
