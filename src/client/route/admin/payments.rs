use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            AttachmentViewer, ConfirmationModal, Page, Pagination, PaginationData,
            ParticipationBadge,
        },
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        route::admin::{AdminTab, AdminTabs, ADMIN_PAGE_SIZE},
    },
    model::{
        accommodation::BookingDto,
        api::PageDto,
        participation::{ParticipationDto, ParticipationStatus},
        upload::ViewAttachmentDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    admin::{cancel_participation, get_bookings, get_participations, verify_booking, verify_payment},
    upload::view_attachment,
};

/// Payment verification for event registrations and stay bookings.
#[component]
pub fn AdminPayments() -> Element {
    let mut status = use_signal(|| Some(ParticipationStatus::PaymentSubmitted));
    let mut registration_page = use_signal(|| 0u64);
    let mut booking_page = use_signal(|| 0u64);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut registrations = use_signal(|| None::<Result<PageDto<ParticipationDto>, ApiError>>);
    #[allow(unused_mut)]
    let mut bookings = use_signal(|| None::<Result<PageDto<BookingDto>, ApiError>>);
    let show_viewer = use_signal(|| false);
    let viewing = use_signal(|| None::<ViewAttachmentDto>);

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        let _ = refetch_trigger();
        registrations.set(Some(
            get_participations(status(), registration_page(), ADMIN_PAGE_SIZE).await,
        ));
    });

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        let _ = refetch_trigger();
        bookings.set(Some(get_bookings(status(), booking_page(), ADMIN_PAGE_SIZE).await));
    });

    rsx! {
        Title { "Payments | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Admin" }
                AdminTabs { active_tab: AdminTab::Payments }
                div {
                    class: "flex items-center gap-3",
                    span { "Status" }
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| {
                            status.set(ParticipationStatus::parse(&evt.value()));
                            registration_page.set(0);
                            booking_page.set(0);
                        },
                        option { value: "", selected: status().is_none(), "All" }
                        for choice in ParticipationStatus::ALL {
                            option {
                                value: choice.as_str(),
                                selected: status() == Some(choice),
                                "{choice.as_str()}"
                            }
                        }
                    }
                }
                section {
                    h2 { class: "text-xl font-semibold mb-3", "Event registrations" }
                    match registrations() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                        Some(Ok(result)) => rsx! {
                            RegistrationTable {
                                items: result.items.clone(),
                                refetch_trigger,
                                viewing,
                                show_viewer,
                            }
                            Pagination { page: registration_page, data: PaginationData::from_page(&result) }
                        },
                    }
                }
                section {
                    h2 { class: "text-xl font-semibold mb-3", "Stay bookings" }
                    match bookings() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                        Some(Ok(result)) => rsx! {
                            BookingTable {
                                items: result.items.clone(),
                                refetch_trigger,
                                viewing,
                                show_viewer,
                            }
                            Pagination { page: booking_page, data: PaginationData::from_page(&result) }
                        },
                    }
                }
            }
        }
        AttachmentViewer { show: show_viewer, attachment: viewing() }
    }
}

#[component]
fn ScreenshotButton(
    screenshot_key: Option<String>,
    mut viewing: Signal<Option<ViewAttachmentDto>>,
    mut show_viewer: Signal<bool>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let Some(key) = screenshot_key else {
        return rsx!(span { class: "opacity-50", "None" });
    };

    rsx!(
        button {
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
            "View"
        }
    )
}

#[component]
fn RegistrationTable(
    items: Vec<ParticipationDto>,
    mut refetch_trigger: Signal<u32>,
    viewing: Signal<Option<ViewAttachmentDto>>,
    show_viewer: Signal<bool>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();
    let mut cancelling = use_signal(|| None::<ParticipationDto>);
    let mut show_cancel = use_signal(|| false);
    #[allow(unused_mut)]
    let mut busy = use_signal(|| false);

    let cancel_body = cancelling
        .read()
        .as_ref()
        .map(|p| format!("Cancel {}'s registration for {}?", p.name, p.event_name))
        .unwrap_or_default();

    rsx!(
        if items.is_empty() {
            p { class: "opacity-70", "No registrations match this filter." }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Participant" }
                            th { "Event" }
                            th { "Amount" }
                            th { "Transaction" }
                            th { "Screenshot" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for participation in items {
                            {
                                let id = participation.id;
                                let awaiting = participation.status == ParticipationStatus::PaymentSubmitted;
                                let cancellable = participation.status != ParticipationStatus::Cancelled;
                                let target = participation.clone();
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td {
                                            p { "{participation.name}" }
                                            p { class: "text-xs opacity-70", "{participation.email}, {participation.college}" }
                                        }
                                        td { "{participation.event_name}" }
                                        td { "₹{participation.payment_amount.unwrap_or_default()}" }
                                        td { class: "font-mono text-xs", "{participation.transaction_id.clone().unwrap_or_default()}" }
                                        td {
                                            ScreenshotButton {
                                                screenshot_key: participation.payment_screenshot_key.clone(),
                                                viewing,
                                                show_viewer,
                                            }
                                        }
                                        td { ParticipationBadge { status: participation.status } }
                                        td {
                                            class: "flex gap-2",
                                            if awaiting {
                                                button {
                                                    class: "btn btn-xs btn-success",
                                                    onclick: move |_| {
                                                        #[cfg(feature = "web")]
                                                        spawn(async move {
                                                            match verify_payment(id).await {
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
                                                    "Verify"
                                                }
                                            }
                                            if cancellable {
                                                button {
                                                    class: "btn btn-xs btn-ghost",
                                                    onclick: move |_| {
                                                        cancelling.set(Some(target.clone()));
                                                        show_cancel.set(true);
                                                    },
                                                    "Cancel"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_cancel,
            title: "Cancel registration".to_string(),
            body: cancel_body,
            confirm_label: "Cancel registration".to_string(),
            busy: busy(),
            on_confirm: move |_| {
                let Some(target) = cancelling() else {
                    return;
                };
                #[cfg(feature = "web")]
                {
                    busy.set(true);
                    spawn(async move {
                        match cancel_participation(target.id).await {
                            Ok(action) => {
                                toasts.success(action.message);
                                refetch_trigger.set(refetch_trigger() + 1);
                            }
                            Err(err) => {
                                toasts.error(err.message);
                            }
                        }
                        busy.set(false);
                        show_cancel.set(false);
                        cancelling.set(None);
                    });
                }
                #[cfg(not(feature = "web"))]
                let _ = target;
            },
        }
    )
}

#[component]
fn BookingTable(
    items: Vec<BookingDto>,
    mut refetch_trigger: Signal<u32>,
    viewing: Signal<Option<ViewAttachmentDto>>,
    show_viewer: Signal<bool>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();

    rsx!(
        if items.is_empty() {
            p { class: "opacity-70", "No bookings match this filter." }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Guest" }
                            th { "Stay" }
                            th { "Dates" }
                            th { "Amount" }
                            th { "Screenshot" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for booking in items {
                            {
                                let id = booking.id;
                                let awaiting = booking.status == ParticipationStatus::PaymentSubmitted;
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td {
                                            p { "{booking.name}" }
                                            p { class: "text-xs opacity-70", "{booking.email}, {booking.phone}" }
                                        }
                                        td { "{booking.place}" }
                                        td { "{booking.check_in} to {booking.check_out} ({booking.guests} guests)" }
                                        td { "₹{booking.amount}" }
                                        td {
                                            ScreenshotButton {
                                                screenshot_key: booking.payment_screenshot_key.clone(),
                                                viewing,
                                                show_viewer,
                                            }
                                        }
                                        td { ParticipationBadge { status: booking.status } }
                                        td {
                                            if awaiting {
                                                button {
                                                    class: "btn btn-xs btn-success",
                                                    onclick: move |_| {
                                                        #[cfg(feature = "web")]
                                                        spawn(async move {
                                                            match verify_booking(id).await {
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
                                                    "Verify"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
