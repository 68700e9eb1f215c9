use dioxus::prelude::*;

use crate::{
    client::{
        component::{FieldError, Page, TicketStatusBadge},
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        router::Route,
    },
    model::support::{TicketCategory, TicketPriority, TicketSummaryDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        support::{create_ticket, get_my_tickets},
        upload::upload_support_files,
    },
    model::support::{validate_ticket_text, CreateTicketDto},
};

const TICKET_ATTACHMENT_INPUT: &str = "ticket-attachments";

#[component]
pub fn Support() -> Element {
    #[allow(unused_mut)]
    let mut tickets = use_signal(|| None::<Result<Vec<TicketSummaryDto>, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        let _ = refetch_trigger();
        tickets.set(Some(get_my_tickets().await));
    });

    rsx! {
        Title { "Support | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-5xl grid gap-8 lg:grid-cols-2",
                NewTicketForm { refetch_trigger }
                section {
                    h2 { class: "text-xl font-semibold mb-3", "My tickets" }
                    match tickets() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "opacity-70", "You have not raised any tickets." }
                        },
                        Some(Ok(list)) => rsx! {
                            TicketTable { tickets: list }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TicketTable(tickets: Vec<TicketSummaryDto>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Ticket" }
                        th { "Subject" }
                        th { "Status" }
                        th { "Priority" }
                        th { "Replies" }
                    }
                }
                tbody {
                    for ticket in tickets {
                        tr {
                            key: "{ticket.id}",
                            td {
                                Link {
                                    class: "link font-mono",
                                    to: Route::Ticket { number: ticket.ticket_number.clone() },
                                    "{ticket.ticket_number}"
                                }
                            }
                            td { "{ticket.subject}" }
                            td { TicketStatusBadge { status: ticket.status } }
                            td { "{ticket.priority.as_str()}" }
                            td { "{ticket.response_count}" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn NewTicketForm(mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let nav = use_navigator();

    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut category = use_signal(|| TicketCategory::General);
    let mut priority = use_signal(|| TicketPriority::Medium);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    rsx!(
        form {
            class: "card bg-base-200 h-fit",
            onsubmit: move |evt| {
                evt.prevent_default();

                #[cfg(feature = "web")]
                {
                    let errors = validate_ticket_text(&subject(), &message());
                    if !errors.is_empty() {
                        error.set(Some(ApiError::validation(errors)));
                        return;
                    }

                    submitting.set(true);
                    spawn(async move {
                        let result = match upload_support_files(TICKET_ATTACHMENT_INPUT).await {
                            Ok(attachments) => {
                                create_ticket(&CreateTicketDto {
                                    subject: subject(),
                                    message: message(),
                                    category: category(),
                                    priority: Some(priority()),
                                    attachments,
                                })
                                .await
                            }
                            Err(err) => Err(err),
                        };

                        match result {
                            Ok(action) => {
                                toasts.success(action.message);
                                error.set(None);
                                subject.set(String::new());
                                message.set(String::new());
                                refetch_trigger.set(refetch_trigger() + 1);
                                if let Some(created) = action.data {
                                    nav.push(Route::Ticket { number: created.ticket_number });
                                }
                            }
                            Err(err) => {
                                toasts.error(err.message.clone());
                                error.set(Some(err));
                            }
                        }
                        submitting.set(false);
                    });
                }
                #[cfg(not(feature = "web"))]
                let _ = nav;
            },
            div {
                class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Raise a ticket" }
                label {
                    class: "form-control",
                    span { class: "label-text", "Subject" }
                    input {
                        class: "input input-bordered",
                        value: "{subject}",
                        oninput: move |evt| subject.set(evt.value()),
                    }
                    FieldError { error: error(), field: "subject" }
                }
                div {
                    class: "flex gap-3",
                    label {
                        class: "form-control flex-1",
                        span { class: "label-text", "Category" }
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| {
                                if let Some(value) = TicketCategory::parse(&evt.value()) {
                                    category.set(value);
                                }
                            },
                            for choice in TicketCategory::ALL.iter().copied() {
                                option {
                                    value: choice.as_str(),
                                    selected: choice == category(),
                                    "{choice.as_str()}"
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control flex-1",
                        span { class: "label-text", "Priority" }
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| {
                                if let Some(value) = TicketPriority::parse(&evt.value()) {
                                    priority.set(value);
                                }
                            },
                            for choice in TicketPriority::ALL.iter().copied() {
                                option {
                                    value: choice.as_str(),
                                    selected: choice == priority(),
                                    "{choice.as_str()}"
                                }
                            }
                        }
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Message" }
                    textarea {
                        class: "textarea textarea-bordered h-32",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    FieldError { error: error(), field: "message" }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Attachments (up to 5 files, 10 MB each)" }
                    input {
                        id: TICKET_ATTACHMENT_INPUT,
                        class: "file-input file-input-bordered",
                        r#type: "file",
                        multiple: true,
                    }
                    FieldError { error: error(), field: "attachments" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Submit ticket"
                }
            }
        }
    )
}
