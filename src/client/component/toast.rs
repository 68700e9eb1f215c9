use dioxus::prelude::*;

use crate::client::model::toast::{ToastKind, Toasts};

#[cfg(feature = "web")]
use crate::client::constant::TOAST_DURATION_MS;

#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_context::<Toasts>();

    rsx!(
        div {
            class: "toast toast-end z-50",
            for toast in toasts.items() {
                ToastItem {
                    key: "{toast.id}",
                    id: toast.id,
                    kind: toast.kind,
                    message: toast.message.clone(),
                }
            }
        }
    )
}

#[component]
fn ToastItem(id: u64, kind: ToastKind, message: String) -> Element {
    let mut toasts = use_context::<Toasts>();

    #[cfg(feature = "web")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.dismiss(id);
    });

    let class = match kind {
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-error",
    };

    rsx!(
        div {
            class: "alert {class} cursor-pointer",
            onclick: move |_| toasts.dismiss(id),
            span { "{message}" }
        }
    )
}
