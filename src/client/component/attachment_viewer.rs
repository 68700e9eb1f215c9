use dioxus::prelude::*;

use crate::{
    client::component::Modal,
    model::{attachment::DisplayMode, upload::ViewAttachmentDto},
};

/// Shows a signed attachment URL inline, picking the element from the display mode.
#[component]
pub fn AttachmentViewer(show: Signal<bool>, attachment: Option<ViewAttachmentDto>) -> Element {
    let Some(attachment) = attachment else {
        return rsx!();
    };
    let url = attachment.url.clone();

    rsx!(
        Modal {
            show,
            title: attachment.file_name.clone(),
            width: "max-w-4xl",
            div {
                class: "flex flex-col gap-4 items-center",
                match attachment.display_mode {
                    DisplayMode::Image => rsx! {
                        img { class: "max-h-[70vh] object-contain", src: "{url}" }
                    },
                    DisplayMode::Pdf => rsx! {
                        iframe { class: "w-full h-[70vh]", src: "{url}" }
                    },
                    DisplayMode::Video => rsx! {
                        video { class: "max-h-[70vh] w-full", controls: true, src: "{url}" }
                    },
                    DisplayMode::Audio => rsx! {
                        audio { class: "w-full", controls: true, src: "{url}" }
                    },
                    DisplayMode::Text => rsx! {
                        iframe { class: "w-full h-[60vh] bg-base-100", src: "{url}" }
                    },
                    DisplayMode::Document | DisplayMode::Download => rsx! {
                        p { class: "opacity-70", "This file cannot be previewed." }
                    },
                }
                a {
                    class: "btn btn-outline btn-sm",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener",
                    "Open in new tab"
                }
            }
        }
    )
}
