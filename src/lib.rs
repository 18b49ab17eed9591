//! Toast notifications for the ensemble management pages
//!
//! Toasts are shown strictly one at a time, in the order they were requested.
//! A toast that must outlive a page reload is stashed in session storage and
//! picked up by the next page load.

pub mod app;
pub(crate) mod constants;
pub mod display;
pub mod handlers;
pub mod host;
pub mod page;
pub mod rendering;
pub mod state;

pub use app::{ToastApp, ToastHandle};
pub use display::{RecordingDisplay, TerminalDisplay, ToastDisplay};
pub use page::Page;
pub use state::{Phase, ToastId, ToastQueue};

pub use ensemble_toasts_config::ToastsConfig;
pub use ensemble_toasts_util::{
    FileSessionStore, MemorySessionStore, Notification, SessionStore, Severity,
};
