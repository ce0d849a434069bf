use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::toast::Toast;
use crate::components::toast::ToastKind;

/// How long a toast stays up unless dismissed.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy)]
pub struct ToastHandle {
    slot: Signal<Option<Toast>>,
}

impl ToastHandle {
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Success, title.into(), message.into());
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Error, title.into(), message.into());
    }

    /// Replaces the visible toast. A newer toast outlives an older timer.
    fn show(&self, kind: ToastKind, title: String, message: String) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        let mut slot = self.slot;
        slot.set(Some(Toast {
            id,
            kind,
            title,
            message,
        }));
        spawn(async move {
            compat::sleep(TOAST_DURATION).await;
            if slot.peek().as_ref().is_some_and(|t| t.id == id) {
                slot.set(None);
            }
        });
    }
}

pub fn use_toast() -> ToastHandle {
    ToastHandle {
        slot: use_context::<AppStateMut>().toast,
    }
}
