//! Transient notification state.
//!
//! DESIGN
//! ======
//! A loading toast is replaced in place by its outcome: `resolve` swaps the
//! kind and message of an existing id instead of stacking a second toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast { id: self.next_id, kind, message: message.into() });
        self.next_id
    }

    /// Turn toast `id` into a final success/error message. A dismissed id
    /// gets a fresh toast.
    pub fn resolve(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.kind = kind;
            toast.message = message;
            return;
        }
        self.push(kind, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
