use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handle shared through context by `ToastProvider`
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: Option<UseReducerDispatcher<ToastList>>,
    next_id: Rc<Cell<usize>>,
}

impl ToastHandle {
    pub fn new(dispatcher: UseReducerDispatcher<ToastList>) -> Self {
        Self {
            dispatcher: Some(dispatcher),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Handle for components rendered outside a provider; only logs
    fn detached() -> Self {
        Self {
            dispatcher: None,
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let Some(dispatcher) = self.dispatcher.clone() else {
            log::info!("🔔 {}", message);
            return;
        };

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));

        Timeout::new(CONFIG.ui_config.toast_duration_ms, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: usize) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(ToastHandle::detached)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: usize) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            message: format!("toast {}", id),
        }
    }

    #[test]
    fn test_push_and_dismiss() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(0)))
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts, vec![toast(1)]);

        let list = list.reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
