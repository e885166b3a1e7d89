use std::rc::Rc;

use shared::Severity;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Oldest toasts are dropped once this many are visible
pub const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// Toasts currently on screen, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push { severity: Severity, message: String },
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { severity, message } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    severity,
                    message,
                });
                next.next_id += 1;
                if next.toasts.len() > MAX_VISIBLE_TOASTS {
                    let overflow = next.toasts.len() - MAX_VISIBLE_TOASTS;
                    next.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle for raising toasts, provided by `ToastProvider`
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl Notifier {
    pub fn new(dispatcher: UseReducerDispatcher<ToastQueue>) -> Self {
        Self { dispatcher }
    }

    pub fn notify(&self, severity: Severity, message: impl Into<String>) {
        self.dispatcher.dispatch(ToastAction::Push {
            severity,
            message: message.into(),
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.dispatcher.dispatch(ToastAction::Dismiss(id));
    }
}

/// Notify through the nearest `ToastProvider`.
///
/// Without a provider the message only reaches the console.
#[hook]
pub fn use_notifier() -> Callback<(Severity, String)> {
    let notifier = use_context::<Notifier>();
    use_callback(notifier, |(severity, message): (Severity, String), notifier| {
        match notifier {
            Some(notifier) => notifier.notify(severity, message),
            None => Logger::warn_with_component(
                "notifier",
                &format!("No toast provider mounted, dropping {:?} notification: {}", severity, message),
            ),
        }
    })
}
