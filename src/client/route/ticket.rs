use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            AttachmentViewer, FieldError, Page, TicketStatusBadge,
        },
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        store::user::UserState,
    },
    model::{
        support::{AttachmentDto, ResponseDto, TicketDetailDto, TicketPriority, TicketStatus},
        upload::ViewAttachmentDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        admin::update_ticket,
        support::{add_response, get_ticket},
        upload::{upload_support_files, view_attachment},
    },
    model::support::{validate_response_text, CreateResponseDto, UpdateTicketDto},
};

const REPLY_ATTACHMENT_INPUT: &str = "reply-attachments";

#[component]
pub fn Ticket(number: String) -> Element {
    #[allow(unused_mut)]
    let mut detail = use_signal(|| None::<Result<TicketDetailDto, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);
    let show_viewer = use_signal(|| false);
    let viewing = use_signal(|| None::<ViewAttachmentDto>);
    let user_store = use_context::<Signal<UserState>>();
    let is_admin = user_store.read().is_admin();

    #[cfg(feature = "web")]
    let _ = use_resource(use_reactive!(|number| async move {
        let _ = refetch_trigger();
        detail.set(Some(get_ticket(&number).await));
    }));

    rsx! {
        match detail() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Some(Ok(detail)) => rsx! {
                Title { "{detail.ticket.ticket_number} | {SITE_NAME}" }
                Page {
                    class: "flex flex-col items-center",
                    div {
                        class: "w-full max-w-3xl flex flex-col gap-4",
                        div {
                            class: "flex flex-col gap-1",
                            p { class: "font-mono opacity-70", "{detail.ticket.ticket_number}" }
                            h1 { class: "text-2xl font-bold", "{detail.ticket.subject}" }
                            div {
                                class: "flex gap-2 flex-wrap items-center",
                                TicketStatusBadge { status: detail.ticket.status }
                                span { class: "badge badge-outline", "{detail.ticket.category.as_str()}" }
                                span { class: "badge badge-outline", "{detail.ticket.priority.as_str()}" }
                            }
                        }
                        if is_admin {
                            TicketControls {
                                number: detail.ticket.ticket_number.clone(),
                                status: detail.ticket.status,
                                priority: detail.ticket.priority,
                                refetch_trigger,
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                p { class: "whitespace-pre-line", "{detail.message}" }
                                AttachmentList { attachments: detail.attachments.clone(), viewing, show_viewer }
                            }
                        }
                        for response in detail.responses.iter() {
                            ResponseCard {
                                key: "{response.id}",
                                response: response.clone(),
                                viewing,
                                show_viewer,
                            }
                        }
                        if detail.ticket.status == TicketStatus::Closed {
                            div { class: "alert", "This ticket is closed." }
                        } else {
                            ReplyForm {
                                number: detail.ticket.ticket_number.clone(),
                                is_admin,
                                refetch_trigger,
                            }
                        }
                    }
                }
                AttachmentViewer { show: show_viewer, attachment: viewing() }
            },
        }
    }
}

#[component]
fn ResponseCard(
    response: ResponseDto,
    viewing: Signal<Option<ViewAttachmentDto>>,
    show_viewer: Signal<bool>,
) -> Element {
    let class = if response.is_internal {
        "card bg-warning/10 border border-warning"
    } else if response.from_staff {
        "card bg-primary/10"
    } else {
        "card bg-base-200"
    };
    let posted = response.created_at.format("%d %b %Y, %H:%M").to_string();

    rsx!(
        div {
            class,
            div {
                class: "card-body gap-2",
                div {
                    class: "flex justify-between text-sm opacity-70",
                    span {
                        "{response.author_name}"
                        if response.from_staff {
                            span { class: "badge badge-sm badge-primary ml-2", "Staff" }
                        }
                        if response.is_internal {
                            span { class: "badge badge-sm badge-warning ml-2", "Internal note" }
                        }
                    }
                    span { "{posted}" }
                }
                p { class: "whitespace-pre-line", "{response.message}" }
                AttachmentList { attachments: response.attachments.clone(), viewing, show_viewer }
            }
        }
    )
}

#[component]
fn AttachmentList(
    attachments: Vec<AttachmentDto>,
    mut viewing: Signal<Option<ViewAttachmentDto>>,
    mut show_viewer: Signal<bool>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();

    rsx!(
        if !attachments.is_empty() {
            div {
                class: "flex gap-2 flex-wrap",
                for attachment in attachments {
                    {
                        let key = attachment.key.clone();
                        rsx! {
                            button {
                                key: "{attachment.id}",
                                class: "btn btn-xs btn-outline",
                                onclick: move |_| {
                                    #[cfg(feature = "web")]
                                    {
                                        let key = key.clone();
                                        spawn(async move {
                                            match view_attachment(&key).await {
                                                Ok(view) => {
                                                    viewing.set(Some(view));
                                                    show_viewer.set(true);
                                                }
                                                Err(err) => {
                                                    toasts.error(err.message);
                                                }
                                            }
                                        });
                                    }
                                    #[cfg(not(feature = "web"))]
                                    let _ = &key;
                                },
                                "{attachment.file_name}"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TicketControls(
    number: String,
    status: TicketStatus,
    priority: TicketPriority,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();

    #[allow(unused_variables)]
    let submit = move |payload_status: Option<TicketStatus>, payload_priority: Option<TicketPriority>| {
        #[cfg(feature = "web")]
        {
            let number = number.clone();
            spawn(async move {
                let payload = UpdateTicketDto {
                    status: payload_status,
                    priority: payload_priority,
                };
                match update_ticket(&number, &payload).await {
                    Ok(action) => {
                        toasts.success(action.message);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => {
                        toasts.error(err.message);
                    }
                }
            });
        }
    };
    let submit_status = submit.clone();
    let submit_priority = submit;

    rsx!(
        div {
            class: "flex gap-3",
            select {
                class: "select select-bordered select-sm",
                onchange: move |evt| {
                    if let Some(value) = TicketStatus::parse(&evt.value()) {
                        submit_status(Some(value), None);
                    }
                },
                for choice in TicketStatus::ALL.iter().copied() {
                    option { value: choice.as_str(), selected: choice == status, "{choice.as_str()}" }
                }
            }
            select {
                class: "select select-bordered select-sm",
                onchange: move |evt| {
                    if let Some(value) = TicketPriority::parse(&evt.value()) {
                        submit_priority(None, Some(value));
                    }
                },
                for choice in TicketPriority::ALL.iter().copied() {
                    option { value: choice.as_str(), selected: choice == priority, "{choice.as_str()}" }
                }
            }
        }
    )
}

#[component]
fn ReplyForm(number: String, is_admin: bool, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let mut message = use_signal(String::new);
    let mut is_internal = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    rsx!(
        form {
            class: "card bg-base-200",
            onsubmit: move |evt| {
                evt.prevent_default();

                #[cfg(feature = "web")]
                {
                    let errors = validate_response_text(&message(), 0);
                    if !errors.is_empty() {
                        error.set(Some(ApiError::validation(errors)));
                        return;
                    }

                    let number = number.clone();
                    submitting.set(true);
                    spawn(async move {
                        let result = match upload_support_files(REPLY_ATTACHMENT_INPUT).await {
                            Ok(attachments) => {
                                add_response(&number, &CreateResponseDto {
                                    message: message(),
                                    is_internal: is_internal(),
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
                                message.set(String::new());
                                is_internal.set(false);
                                refetch_trigger.set(refetch_trigger() + 1);
                            }
                            Err(err) => {
                                toasts.error(err.message.clone());
                                error.set(Some(err));
                            }
                        }
                        submitting.set(false);
                    });
                }
            },
            div {
                class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Reply" }
                textarea {
                    class: "textarea textarea-bordered h-28",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                FieldError { error: error(), field: "message" }
                input {
                    id: REPLY_ATTACHMENT_INPUT,
                    class: "file-input file-input-bordered file-input-sm",
                    r#type: "file",
                    multiple: true,
                }
                FieldError { error: error(), field: "attachments" }
                if is_admin {
                    label {
                        class: "label cursor-pointer justify-start gap-2",
                        input {
                            class: "checkbox checkbox-sm",
                            r#type: "checkbox",
                            checked: is_internal(),
                            onchange: move |evt| is_internal.set(evt.checked()),
                        }
                        span { class: "label-text", "Internal note (hidden from the participant)" }
                    }
                }
                button {
                    class: "btn btn-primary w-fit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Send"
                }
            }
        }
    )
}
