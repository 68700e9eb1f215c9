pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// daisyUI dialog. While `locked` the dialog ignores Escape, the close button
/// and backdrop clicks, so a request in flight cannot be dismissed mid-way.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    #[props(default)] locked: bool,
    #[props(default = "max-w-lg")] width: &'static str,
    children: Element,
) -> Element {
    let mut close = move || {
        if !locked {
            show.set(false);
        }
    };

    rsx!(
        dialog {
            class: if show() { "modal modal-open" } else { "modal" },
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box w-11/12 {width}",
                header {
                    class: "flex items-start justify-between gap-2 mb-4",
                    h3 { class: "font-bold text-lg break-all", "{title}" }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-circle btn-ghost",
                        disabled: locked,
                        onclick: move |_| close(),
                        "✕"
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
