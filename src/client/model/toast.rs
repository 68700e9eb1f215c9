use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue shared through context. Every action result is reported here.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = *self.next_id.read();
        self.next_id.set(id + 1);
        self.items.write().push(Toast { id, kind, message });
        id
    }
}
