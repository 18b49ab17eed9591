//! One page load, from construction to navigation
//!
//! A page owns the toast controller and the reload bridge. Loading a page
//! starts the controller and then consumes any toast stashed by the previous
//! page, before the page is handed to callers, so nothing can stash for a
//! further reload ahead of that delivery.

use ensemble_toasts_config::ToastsConfig;
use ensemble_toasts_util::{BridgeKeys, ReloadBridge, SessionStore, Severity};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::{ToastApp, ToastHandle};
use crate::display::ToastDisplay;

struct Loading;
struct Ready;

struct Machine<S, P> {
    bridge: ReloadBridge<S>,
    toasts: ToastHandle,
    controller: Option<JoinHandle<()>>,
    marker: core::marker::PhantomData<P>,
}

impl<S, P> Machine<S, P> {
    fn transition<Next>(self) -> Machine<S, Next> {
        Machine::<S, Next> {
            bridge: self.bridge,
            toasts: self.toasts,
            controller: self.controller,
            marker: core::marker::PhantomData,
        }
    }
}

impl<S: SessionStore> Machine<S, Loading> {
    fn new<D: ToastDisplay>(config: &ToastsConfig, store: S, display: D) -> Self {
        let bridge = ReloadBridge::new(store, BridgeKeys::from_config(config));

        let (toasts, controller) = if display.is_available() {
            let (app, handle) = ToastApp::new(config, display);
            let task = tokio::spawn(async move {
                app.run().await;
            });
            (handle, Some(task))
        } else {
            warn!("toast display unavailable, toasts on this page are dropped");
            (ToastHandle::detached(), None)
        };

        Self {
            bridge,
            toasts,
            controller,
            marker: core::marker::PhantomData,
        }
    }

    fn exec(mut self) -> Machine<S, Ready> {
        consume(&mut self.bridge, &self.toasts);
        self.transition::<Ready>()
    }
}

fn consume<S: SessionStore>(bridge: &mut ReloadBridge<S>, toasts: &ToastHandle) -> bool {
    match bridge.take_and_clear() {
        Some(notification) => {
            debug!(
                severity = %notification.severity(),
                "delivering toast stashed before reload"
            );
            toasts.enqueue_notification(notification);
            true
        }
        None => false,
    }
}

/// A loaded page with its toast machinery running
///
/// Must be created inside a tokio runtime.
pub struct Page<S: SessionStore> {
    inner: Option<Machine<S, Ready>>,
}

impl<S: SessionStore> Page<S> {
    /// Load a page on top of the session `store` left by the previous page.
    pub fn load<D: ToastDisplay>(config: &ToastsConfig, store: S, display: D) -> Self {
        let machine = Machine::<S, Loading>::new(config, store, display).exec();
        Self {
            inner: Some(machine),
        }
    }

    fn machine(&self) -> &Machine<S, Ready> {
        match &self.inner {
            Some(machine) => machine,
            None => unreachable!("page used after navigation"),
        }
    }

    fn machine_mut(&mut self) -> &mut Machine<S, Ready> {
        match &mut self.inner {
            Some(machine) => machine,
            None => unreachable!("page used after navigation"),
        }
    }

    /// Handle for collaborators that only ever show toasts in place.
    pub fn toasts(&self) -> ToastHandle {
        self.machine().toasts.clone()
    }

    /// Show a toast on this page, after any already queued.
    pub fn enqueue(&self, message: &str, severity: impl Into<Severity>) {
        self.machine().toasts.enqueue(message, severity);
    }

    /// Leave a toast for the next page load, replacing any left earlier.
    pub fn stash_for_next_load(&mut self, message: &str, severity: impl Into<Severity>) {
        self.machine_mut()
            .bridge
            .stash_for_next_load(message, severity.into());
    }

    /// Deliver a toast stashed by the previous page, if one is still there.
    ///
    /// Loading already does this; calling it again is a no-op unless
    /// something stashed in between.
    pub fn consume_if_present(&mut self) -> bool {
        let machine = self.machine_mut();
        consume(&mut machine.bridge, &machine.toasts)
    }

    /// Stash a toast and leave the page, as an action that reloads does.
    pub async fn toast_after_reload(mut self, message: &str, severity: impl Into<Severity>) -> S {
        self.stash_for_next_load(message, severity);
        self.navigate().await
    }

    /// Tear the page down and return the session store for the next load.
    ///
    /// Toasts queued or on screen are discarded.
    pub async fn navigate(mut self) -> S {
        let Some(machine) = self.inner.take() else {
            unreachable!("page navigated twice");
        };
        machine.toasts.shutdown();
        if let Some(controller) = machine.controller {
            if let Err(err) = controller.await {
                warn!("Toast controller ended abnormally: {}", err);
            }
        }
        machine.bridge.into_store()
    }
}

impl<S: SessionStore> Drop for Page<S> {
    fn drop(&mut self) {
        if let Some(machine) = &self.inner {
            machine.toasts.shutdown();
        }
    }
}
