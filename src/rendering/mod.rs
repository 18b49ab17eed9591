pub mod toast;

pub use toast::{ContainerSpec, RenderedToast, ToastRenderer};
