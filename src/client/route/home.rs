use dioxus::prelude::*;

use crate::{
    client::{
        component::{AttachmentViewer, FieldError, Page, ParticipationBadge},
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        router::Route,
        store::user::UserState,
    },
    model::{
        announcement::AnnouncementDto, event::EventDto, participation::ParticipationDto,
        upload::ViewAttachmentDto, user::UserDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        announcement::get_announcements, event::get_events,
        participation::get_my_participations, upload::view_announcement_attachment,
        user::update_profile,
    },
    model::user::UpdateProfileDto,
};

#[component]
pub fn Home() -> Element {
    let mut events = use_signal(|| None::<Result<Vec<EventDto>, ApiError>>);
    let mut announcements = use_signal(Vec::<AnnouncementDto>::new);
    let mut registrations = use_signal(Vec::<ParticipationDto>::new);
    let user_store = use_context::<Signal<UserState>>();

    #[cfg(feature = "web")]
    use_future(move || async move {
        events.set(Some(get_events().await));
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        match get_announcements().await {
            Ok(list) => announcements.set(list),
            Err(err) => dioxus_logger::tracing::error!("Failed to fetch announcements: {}", err),
        }
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        match get_my_participations().await {
            Ok(list) => registrations.set(list),
            Err(err) => dioxus_logger::tracing::error!("Failed to fetch registrations: {}", err),
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",
                if let Some(user) = user_store.read().user.clone() {
                    ProfileCard { user }
                }
                if !registrations.read().is_empty() {
                    section {
                        h2 { class: "text-xl font-semibold mb-3", "My registrations" }
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Event" }
                                        th { "Status" }
                                        th { "Amount" }
                                    }
                                }
                                tbody {
                                    for registration in registrations.read().iter() {
                                        tr {
                                            key: "{registration.id}",
                                            td {
                                                Link {
                                                    class: "link",
                                                    to: Route::EventPage { slug: registration.event_slug.clone() },
                                                    "{registration.event_name}"
                                                }
                                            }
                                            td { ParticipationBadge { status: registration.status } }
                                            td {
                                                match registration.payment_amount {
                                                    Some(amount) if amount > 0 => rsx! { "₹{amount}" },
                                                    _ => rsx! { "Free" },
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { class: "text-xl font-semibold mb-3", "Events" }
                    match events() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "opacity-70", "No events have been announced yet." }
                        },
                        Some(Ok(list)) => rsx! {
                            div {
                                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                                for event in list {
                                    EventCard { key: "{event.id}", event: event.clone() }
                                }
                            }
                        },
                    }
                }

                if !announcements.read().is_empty() {
                    Announcements { announcements: announcements() }
                }
            }
        }
    }
}

#[component]
fn EventCard(event: EventDto) -> Element {
    let fee = if event.fee > 0 {
        format!("₹{}", event.fee)
    } else {
        "Free".to_string()
    };
    let starts = event.starts_at.format("%d %b %Y, %H:%M UTC").to_string();

    rsx!(
        Link {
            to: Route::EventPage { slug: event.slug.clone() },
            class: "card bg-base-200 hover:bg-base-300",
            div {
                class: "card-body",
                h3 { class: "card-title", "{event.name}" }
                p { class: "text-sm opacity-70", "{starts}" }
                div {
                    class: "flex gap-2 flex-wrap",
                    span { class: "badge badge-outline", "{fee}" }
                    if event.team_event {
                        span { class: "badge badge-outline", "Team of {event.min_team_size}-{event.max_team_size}" }
                    }
                    if !event.registration_open {
                        span { class: "badge badge-error", "Closed" }
                    }
                }
            }
        }
    )
}

#[component]
fn Announcements(announcements: Vec<AnnouncementDto>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let mut show_viewer = use_signal(|| false);
    #[allow(unused_mut)]
    let mut viewing = use_signal(|| None::<ViewAttachmentDto>);

    rsx!(
        section {
            h2 { class: "text-xl font-semibold mb-3", "Announcements" }
            div {
                class: "flex flex-col gap-4",
                for announcement in announcements {
                    {
                        let id = announcement.id;
                        rsx! {
                            article {
                                key: "{id}",
                                class: "card bg-base-200",
                                div {
                                    class: "card-body",
                                    h3 { class: "card-title", "{announcement.title}" }
                                    div {
                                        class: "prose max-w-none",
                                        dangerous_inner_html: "{announcement.body_html}"
                                    }
                                    if let Some(name) = announcement.attachment_name.clone() {
                                        button {
                                            class: "btn btn-sm btn-outline w-fit",
                                            onclick: move |_| {
                                                #[cfg(feature = "web")]
                                                spawn(async move {
                                                    match view_announcement_attachment(id).await {
                                                        Ok(view) => {
                                                            viewing.set(Some(view));
                                                            show_viewer.set(true);
                                                        }
                                                        Err(err) => {
                                                            toasts.error(err.message);
                                                        }
                                                    }
                                                });
                                            },
                                            "{name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        AttachmentViewer { show: show_viewer, attachment: viewing() }
    )
}

#[component]
fn ProfileCard(user: UserDto) -> Element {
    #[allow(unused_mut)]
    let mut user_store = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let mut editing = use_signal(|| false);
    let mut name = use_signal(|| user.name.clone());
    let mut phone = use_signal(|| user.phone.clone().unwrap_or_default());
    let mut college = use_signal(|| user.college.clone().unwrap_or_default());
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    let phone_label = user.phone.clone().unwrap_or_else(|| "No phone".to_string());
    let college_label = user.college.clone().unwrap_or_else(|| "No college".to_string());

    rsx!(
        section {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                div {
                    class: "flex items-center justify-between",
                    div {
                        h2 { class: "card-title", "{user.name}" }
                        p { class: "text-sm opacity-70", "{user.email}, {phone_label}, {college_label}" }
                    }
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| editing.set(!editing()),
                        if editing() { "Close" } else { "Edit profile" }
                    }
                }
                if editing() {
                    form {
                        class: "flex flex-col sm:flex-row gap-3 sm:items-start",
                        onsubmit: move |evt| {
                            evt.prevent_default();

                            #[cfg(feature = "web")]
                            spawn(async move {
                                let optional = |value: String| (!value.trim().is_empty()).then_some(value);
                                let payload = UpdateProfileDto {
                                    name: name(),
                                    phone: optional(phone()),
                                    college: optional(college()),
                                };
                                match update_profile(&payload).await {
                                    Ok(action) => {
                                        toasts.success(action.message);
                                        error.set(None);
                                        if let Some(updated) = action.data {
                                            user_store.write().user = Some(updated);
                                        }
                                        editing.set(false);
                                    }
                                    Err(err) => {
                                        toasts.error(err.message.clone());
                                        error.set(Some(err));
                                    }
                                }
                            });
                        },
                        div {
                            class: "flex-1",
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "Name",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                            FieldError { error: error(), field: "name" }
                        }
                        div {
                            class: "flex-1",
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "Phone",
                                r#type: "tel",
                                value: "{phone}",
                                oninput: move |evt| phone.set(evt.value()),
                            }
                            FieldError { error: error(), field: "phone" }
                        }
                        div {
                            class: "flex-1",
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "College",
                                value: "{college}",
                                oninput: move |evt| college.set(evt.value()),
                            }
                            FieldError { error: error(), field: "college" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    )
}
