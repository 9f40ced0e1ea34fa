#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Transient notification (toast) state.
///
/// Every classified API failure and every user-visible success surfaces as
/// exactly one toast; the render layer never shows raw errors.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
}

/// Severity of a toast, mapped to styling by the toast host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

impl NotifyState {
    /// Queue a toast and return its id (used for dismissal).
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
