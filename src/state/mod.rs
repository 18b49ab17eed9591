pub mod queue;

pub use queue::{Effect, Input, Phase, ToastId, ToastQueue};
