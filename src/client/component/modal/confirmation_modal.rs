use dioxus::prelude::*;

use super::Modal;

/// Asks before a destructive action. `busy` locks both buttons while the action runs.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    body: String,
    confirm_label: String,
    #[props(default = "btn-error".to_string())] confirm_class: String,
    busy: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            locked: busy,
            p { "{body}" }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: busy,
                    onclick: move |_| show.set(false),
                    "Keep"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "{confirm_label}"
                }
            }
        }
    )
}
