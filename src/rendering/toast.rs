use crate::constants::*;
use crate::state::ToastId;
use ensemble_toasts_config::ToastsConfig;
use ensemble_toasts_util::{Notification, Severity, escape_text, severity_class};

/// The fixed element every toast is appended to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub id: String,
    pub class: String,
    pub z_index: u32,
}

impl ContainerSpec {
    pub fn markup(&self) -> String {
        format!(
            r#"<div id="{}" class="{}" style="z-index: {}"></div>"#,
            escape_text(&self.id),
            escape_text(&self.class),
            self.z_index
        )
    }
}

/// A toast ready to be put on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToast {
    pub id: ToastId,
    /// DOM id of the toast element
    pub element_id: String,
    pub severity: Severity,
    /// Unescaped message, for non-HTML displays
    pub message: String,
    pub html: String,
}

/// Turns queued toasts into self-contained markup
#[derive(Debug, Clone)]
pub struct ToastRenderer {
    container: ContainerSpec,
}

impl ToastRenderer {
    pub fn new(config: &ToastsConfig) -> Self {
        Self {
            container: ContainerSpec {
                id: config.container_id.clone(),
                class: config.container_class.clone(),
                z_index: config.z_index,
            },
        }
    }

    pub fn container(&self) -> &ContainerSpec {
        &self.container
    }

    pub fn render(&self, id: ToastId, notification: &Notification) -> RenderedToast {
        let element_id = element_id(id);
        let severity = notification.severity();
        let html = format!(
            concat!(
                r#"<div id="{id}" class="toast align-items-center {class} border-0" "#,
                r#"role="alert" aria-live="assertive" aria-atomic="true">"#,
                r#"<div class="d-flex">"#,
                r#"<div class="toast-body">{body}</div>"#,
                r#"<button type="button" class="btn-close btn-close-white me-2 m-auto" "#,
                r#"data-bs-dismiss="toast" aria-label="Close"></button>"#,
                r#"</div></div>"#
            ),
            id = element_id,
            class = severity_class(severity),
            body = escape_text(notification.message()),
        );

        RenderedToast {
            id,
            element_id,
            severity,
            message: notification.message().to_string(),
            html,
        }
    }
}

/// DOM id for a toast: prefix plus the id in base 36
fn element_id(id: ToastId) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut n = id.get();
    let mut digits = Vec::new();
    loop {
        digits.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    let mut out = String::from(TOAST_ELEMENT_PREFIX);
    out.extend(digits.iter().rev());
    out
}
