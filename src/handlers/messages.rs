use crate::state::ToastId;
use ensemble_toasts_util::Notification;

/// Messages processed by the toast controller, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A caller asked for a toast
    Enqueue(Notification),
    /// Visible duration of a toast elapsed
    Timeout(ToastId),
    /// Toast closed by the user
    Dismissed(ToastId),
    /// Close whichever toast is visible, if any
    DismissCurrent,
    /// Pause between toasts is over
    CooldownElapsed,
    /// The page is going away
    Shutdown,
}
