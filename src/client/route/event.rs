use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, FieldError, Page, ParticipationBadge,
        },
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        store::user::UserState,
    },
    model::{
        event::EventDto,
        participation::{ParticipationDto, ParticipationStatus},
        team::TeamDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        event::get_event,
        participation::{checkout, get_my_participations, register, reupload_payment},
        team::{create_team, get_team, leave_team, request_join, respond_to_request},
        upload::upload_payment_screenshot,
    },
    model::{
        participation::{CheckoutDto, RegistrationDto, ReuploadPaymentDto},
        team::{CreateJoinRequestDto, CreateTeamDto},
        validation::validate_registrant,
    },
};

const SCREENSHOT_INPUT: &str = "payment-screenshot";
const REUPLOAD_INPUT: &str = "payment-reupload";

#[component]
pub fn EventPage(slug: String) -> Element {
    #[allow(unused_mut)]
    let mut event = use_signal(|| None::<Result<EventDto, ApiError>>);
    #[allow(unused_mut)]
    let mut registration = use_signal(|| None::<ParticipationDto>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let _ = use_resource(use_reactive!(|slug| async move {
        let _ = refetch_trigger();
        let result = get_event(&slug).await;
        if let Ok(found) = &result {
            match get_my_participations().await {
                Ok(list) => registration.set(list.into_iter().find(|p| p.event_id == found.id)),
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch registrations: {}", err)
                }
            }
        }
        event.set(Some(result));
    }));

    let current = event();

    rsx! {
        match current {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Some(Ok(event)) => rsx! {
                Title { "{event.name} | {SITE_NAME}" }
                Page {
                    class: "flex flex-col items-center",
                    div {
                        class: "w-full max-w-3xl flex flex-col gap-6",
                        EventHeader { event: event.clone() }
                        match registration() {
                            Some(existing) => rsx! {
                                RegistrationStatus {
                                    event: event.clone(),
                                    registration: existing.clone(),
                                    refetch_trigger,
                                }
                                if event.team_event && existing.status != ParticipationStatus::Cancelled {
                                    TeamSection {
                                        event: event.clone(),
                                        registration: existing,
                                        refetch_trigger,
                                    }
                                }
                            },
                            None if event.registration_open => rsx! {
                                RegistrationForm { event: event.clone(), refetch_trigger }
                            },
                            None => rsx! {
                                div { class: "alert", "Registration for this event is closed." }
                            },
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn EventHeader(event: EventDto) -> Element {
    let starts = event.starts_at.format("%d %b %Y, %H:%M UTC").to_string();

    rsx!(
        div {
            class: "flex flex-col gap-2",
            h1 { class: "text-2xl font-bold", "{event.name}" }
            p { class: "opacity-70", "{starts}" }
            if let Some(venue) = &event.venue {
                p { class: "opacity-70", "{venue}" }
            }
            p { class: "whitespace-pre-line", "{event.description}" }
            div {
                class: "flex gap-2",
                if event.fee > 0 {
                    span { class: "badge badge-outline", "₹{event.fee}" }
                } else {
                    span { class: "badge badge-outline", "Free" }
                }
                if event.team_event {
                    span { class: "badge badge-outline", "Teams of {event.min_team_size}-{event.max_team_size}" }
                }
            }
        }
    )
}

#[component]
fn RegistrationForm(event: EventDto, mut refetch_trigger: Signal<u32>) -> Element {
    let user_store = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();

    let profile = user_store.read().user.clone();
    let mut name = use_signal(|| profile.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| profile.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default());
    let mut college =
        use_signal(|| profile.as_ref().and_then(|u| u.college.clone()).unwrap_or_default());
    let mut transaction_id = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let paid = event.fee > 0;
    let event_id = event.id;

    rsx!(
        form {
            class: "card bg-base-200",
            onsubmit: move |evt| {
                evt.prevent_default();

                #[cfg(feature = "web")]
                {
                    let errors = validate_registrant(&name(), &phone(), &college());
                    if !errors.is_empty() {
                        error.set(Some(ApiError::validation(errors)));
                        return;
                    }

                    submitting.set(true);
                    spawn(async move {
                        let result = if paid {
                            match upload_payment_screenshot(SCREENSHOT_INPUT).await {
                                Ok(screenshot_key) => {
                                    let tx = transaction_id();
                                    checkout(event_id, &CheckoutDto {
                                        name: name(),
                                        phone: phone(),
                                        college: college(),
                                        screenshot_key,
                                        transaction_id: (!tx.trim().is_empty()).then_some(tx),
                                    })
                                    .await
                                }
                                Err(err) => Err(err),
                            }
                        } else {
                            register(event_id, &RegistrationDto {
                                name: name(),
                                phone: phone(),
                                college: college(),
                            })
                            .await
                        };

                        match result {
                            Ok(action) => {
                                toasts.success(action.message);
                                error.set(None);
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
                h2 { class: "card-title", "Register" }
                label {
                    class: "form-control",
                    span { class: "label-text", "Name" }
                    input {
                        class: "input input-bordered",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    FieldError { error: error(), field: "name" }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Phone" }
                    input {
                        class: "input input-bordered",
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                    FieldError { error: error(), field: "phone" }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "College" }
                    input {
                        class: "input input-bordered",
                        value: "{college}",
                        oninput: move |evt| college.set(evt.value()),
                    }
                    FieldError { error: error(), field: "college" }
                }
                if paid {
                    label {
                        class: "form-control",
                        span { class: "label-text", "Payment screenshot (JPEG, PNG or WebP, up to 5 MB)" }
                        input {
                            id: SCREENSHOT_INPUT,
                            class: "file-input file-input-bordered",
                            r#type: "file",
                            accept: "image/jpeg,image/png,image/webp",
                        }
                        FieldError { error: error(), field: "screenshot" }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text", "Transaction ID (optional)" }
                        input {
                            class: "input input-bordered",
                            value: "{transaction_id}",
                            oninput: move |evt| transaction_id.set(evt.value()),
                        }
                        FieldError { error: error(), field: "transaction_id" }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    if paid { "Pay ₹{event.fee} and register" } else { "Register" }
                }
            }
        }
    )
}

#[component]
fn RegistrationStatus(
    event: EventDto,
    registration: ParticipationDto,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let can_reupload = event.fee > 0
        && matches!(
            registration.status,
            ParticipationStatus::Registered | ParticipationStatus::PaymentSubmitted
        );
    let participation_id = registration.id;

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-3",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Your registration" }
                    ParticipationBadge { status: registration.status }
                }
                if let Some(tx) = &registration.transaction_id {
                    p { class: "text-sm opacity-70", "Transaction ID: {tx}" }
                }
                if can_reupload {
                    div {
                        class: "flex flex-col sm:flex-row gap-2 items-start sm:items-end",
                        label {
                            class: "form-control",
                            span { class: "label-text", "Replace payment screenshot" }
                            input {
                                id: REUPLOAD_INPUT,
                                class: "file-input file-input-bordered file-input-sm",
                                r#type: "file",
                                accept: "image/jpeg,image/png,image/webp",
                            }
                        }
                        button {
                            class: "btn btn-sm",
                            disabled: submitting(),
                            onclick: move |_| {
                                #[cfg(feature = "web")]
                                {
                                    submitting.set(true);
                                    spawn(async move {
                                        let result = match upload_payment_screenshot(REUPLOAD_INPUT).await {
                                            Ok(screenshot_key) => {
                                                reupload_payment(&ReuploadPaymentDto {
                                                    participation_id,
                                                    screenshot_key,
                                                    transaction_id: None,
                                                })
                                                .await
                                            }
                                            Err(err) => Err(err),
                                        };
                                        match result {
                                            Ok(action) => {
                                                toasts.success(action.message);
                                                refetch_trigger.set(refetch_trigger() + 1);
                                            }
                                            Err(err) => {
                                                toasts.error(err.message);
                                            }
                                        }
                                        submitting.set(false);
                                    });
                                }
                            },
                            "Upload"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TeamSection(
    event: EventDto,
    registration: ParticipationDto,
    refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut)]
    let mut team = use_signal(|| None::<TeamDto>);
    let team_id = registration.team_id;

    #[cfg(feature = "web")]
    let _ = use_resource(use_reactive!(|team_id| async move {
        let _ = refetch_trigger();
        match team_id {
            Some(id) => match get_team(id).await {
                Ok(found) => team.set(Some(found)),
                Err(err) => dioxus_logger::tracing::error!("Failed to fetch team: {}", err),
            },
            None => team.set(None),
        }
    }));

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Team" }
                match (team_id, team()) {
                    (Some(_), Some(team)) => rsx! {
                        TeamDetails {
                            team,
                            participation_id: registration.id,
                            refetch_trigger,
                        }
                    },
                    (Some(_), None) => rsx! { span { class: "loading loading-spinner" } },
                    (None, _) => rsx! {
                        NoTeam { event_id: event.id, refetch_trigger }
                    },
                }
            }
        }
    )
}

#[component]
fn TeamDetails(team: TeamDto, participation_id: i32, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let mut confirm_leave = use_signal(|| false);
    #[allow(unused_mut)]
    let mut leaving = use_signal(|| false);
    let is_leader = team.leader_participation_id == participation_id;
    let team_id = team.id;
    let leave_body = if is_leader && team.members.len() == 1 {
        "You are the only member, so the team will be dissolved.".to_string()
    } else {
        format!("You will be removed from {}.", team.name)
    };

    rsx!(
        p { class: "font-semibold", "{team.name} (team #{team.id})" }
        ul {
            class: "list-disc ml-6",
            for member in team.members.iter() {
                li {
                    key: "{member.participation_id}",
                    "{member.name}, {member.college}"
                    if member.leader {
                        span { class: "badge badge-sm badge-primary ml-2", "Leader" }
                    }
                }
            }
        }
        if is_leader && !team.pending_requests.is_empty() {
            h3 { class: "font-semibold", "Join requests" }
            for request in team.pending_requests.clone() {
                {
                    let request_id = request.id;
                    rsx! {
                        div {
                            key: "{request_id}",
                            class: "flex items-center justify-between gap-2",
                            div {
                                p { "{request.name}, {request.college}" }
                                if let Some(message) = &request.message {
                                    p { class: "text-sm opacity-70", "{message}" }
                                }
                            }
                            div {
                                class: "flex gap-2",
                                for approve in [true, false] {
                                    button {
                                        class: if approve { "btn btn-sm btn-success" } else { "btn btn-sm btn-ghost" },
                                        onclick: move |_| {
                                            #[cfg(feature = "web")]
                                            spawn(async move {
                                                match respond_to_request(request_id, approve).await {
                                                    Ok(action) => {
                                                        toasts.success(action.message);
                                                        refetch_trigger.set(refetch_trigger() + 1);
                                                    }
                                                    Err(err) => {
                                                        toasts.error(err.message);
                                                    }
                                                }
                                            });
                                        },
                                        if approve { "Approve" } else { "Reject" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        button {
            class: "btn btn-sm btn-outline btn-error w-fit",
            onclick: move |_| confirm_leave.set(true),
            "Leave team"
        }
        ConfirmationModal {
            show: confirm_leave,
            title: "Leave team".to_string(),
            body: leave_body,
            confirm_label: "Leave".to_string(),
            busy: leaving(),
            on_confirm: move |_| {
                #[cfg(feature = "web")]
                {
                    leaving.set(true);
                    spawn(async move {
                        match leave_team(team_id).await {
                            Ok(action) => {
                                toasts.success(action.message);
                                refetch_trigger.set(refetch_trigger() + 1);
                            }
                            Err(err) => {
                                toasts.error(err.message);
                            }
                        }
                        leaving.set(false);
                        confirm_leave.set(false);
                    });
                }
            },
        }
    )
}

#[component]
fn NoTeam(event_id: i32, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let mut team_name = use_signal(String::new);
    let mut join_id = use_signal(String::new);
    let mut join_message = use_signal(String::new);

    rsx!(
        p { class: "opacity-70", "Create a team or ask to join an existing one." }
        div {
            class: "flex gap-2",
            input {
                class: "input input-bordered flex-1",
                placeholder: "Team name",
                value: "{team_name}",
                oninput: move |evt| team_name.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    spawn(async move {
                        let payload = CreateTeamDto { event_id, name: team_name() };
                        match create_team(&payload).await {
                            Ok(action) => {
                                toasts.success(action.message);
                                refetch_trigger.set(refetch_trigger() + 1);
                            }
                            Err(err) => {
                                toasts.error(err.message);
                            }
                        }
                    });
                },
                "Create team"
            }
        }
        div {
            class: "flex flex-col sm:flex-row gap-2",
            input {
                class: "input input-bordered sm:w-32",
                placeholder: "Team #",
                r#type: "number",
                value: "{join_id}",
                oninput: move |evt| join_id.set(evt.value()),
            }
            input {
                class: "input input-bordered flex-1",
                placeholder: "Message to the leader (optional)",
                value: "{join_message}",
                oninput: move |evt| join_message.set(evt.value()),
            }
            button {
                class: "btn",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    {
                        let Ok(team_id) = join_id().trim().parse::<i32>() else {
                            toasts.error("Enter the team number shared by the leader");
                            return;
                        };
                        spawn(async move {
                            let message = join_message();
                            let payload = CreateJoinRequestDto {
                                message: (!message.trim().is_empty()).then_some(message),
                            };
                            match request_join(team_id, &payload).await {
                                Ok(action) => {
                                    toasts.success(action.message);
                                }
                                Err(err) => {
                                    toasts.error(err.message);
                                }
                            }
                        });
                    }
                },
                "Request to join"
            }
        }
    )
}
