use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{
    client::{
        component::{FieldError, Page, ParticipationBadge},
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        store::user::UserState,
    },
    model::accommodation::{BookingDto, FoodDto, StayDto, WEEKDAYS},
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        accommodation::{book_stay, get_food, get_my_bookings, get_stays},
        upload::upload_payment_screenshot,
    },
    model::{accommodation::BookStayDto, api::FieldErrorDto, validation::check_phone},
};

const STAY_SCREENSHOT_INPUT: &str = "stay-screenshot";

#[component]
pub fn Accommodation() -> Element {
    #[allow(unused_mut)]
    let mut stays = use_signal(|| None::<Result<Vec<StayDto>, ApiError>>);
    #[allow(unused_mut)]
    let mut food = use_signal(Vec::<FoodDto>::new);
    #[allow(unused_mut)]
    let mut bookings = use_signal(Vec::<BookingDto>::new);
    let mut selected = use_signal(|| None::<StayDto>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    use_future(move || async move {
        stays.set(Some(get_stays().await));
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        match get_food().await {
            Ok(list) => food.set(list),
            Err(err) => dioxus_logger::tracing::error!("Failed to fetch food menu: {}", err),
        }
    });

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        let _ = refetch_trigger();
        match get_my_bookings().await {
            Ok(list) => bookings.set(list),
            Err(err) => dioxus_logger::tracing::error!("Failed to fetch bookings: {}", err),
        }
    });

    rsx! {
        Title { "Accommodation | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-5xl flex flex-col gap-8",
                if !bookings.read().is_empty() {
                    MyBookings { bookings: bookings() }
                }
                section {
                    h2 { class: "text-xl font-semibold mb-3", "Stays" }
                    match stays() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "opacity-70", "No stays are listed yet." }
                        },
                        Some(Ok(list)) => rsx! {
                            div {
                                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                                for stay in list {
                                    {
                                        let active = selected.read().as_ref().is_some_and(|s| s.id == stay.id);
                                        let pick = stay.clone();
                                        rsx! {
                                            div {
                                                key: "{stay.id}",
                                                class: if active { "card bg-base-300 ring ring-primary" } else { "card bg-base-200" },
                                                div {
                                                    class: "card-body",
                                                    h3 { class: "card-title", "{stay.place}" }
                                                    if let Some(description) = &stay.description {
                                                        p { class: "text-sm opacity-70", "{description}" }
                                                    }
                                                    p { "₹{stay.price} per guest per night" }
                                                    button {
                                                        class: "btn btn-sm btn-primary w-fit",
                                                        onclick: move |_| selected.set(Some(pick.clone())),
                                                        "Book"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
                if let Some(stay) = selected() {
                    BookingForm { key: "{stay.id}", stay, refetch_trigger }
                }
                if !food.read().is_empty() {
                    FoodMenu { food: food() }
                }
            }
        }
    }
}

#[component]
fn MyBookings(bookings: Vec<BookingDto>) -> Element {
    rsx!(
        section {
            h2 { class: "text-xl font-semibold mb-3", "My bookings" }
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Stay" }
                            th { "Dates" }
                            th { "Guests" }
                            th { "Amount" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for booking in bookings {
                            tr {
                                key: "{booking.id}",
                                td { "{booking.place}" }
                                td { "{booking.check_in} to {booking.check_out}" }
                                td { "{booking.guests}" }
                                td { "₹{booking.amount}" }
                                td { ParticipationBadge { status: booking.status } }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Nights between two `YYYY-MM-DD` inputs, when both parse and are ordered.
fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d").ok()?;
    let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d").ok()?;
    let nights = (check_out - check_in).num_days();
    (nights > 0).then_some(nights)
}

#[component]
fn BookingForm(stay: StayDto, mut refetch_trigger: Signal<u32>) -> Element {
    let user_store = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut toasts = use_context::<Toasts>();

    let mut check_in = use_signal(String::new);
    let mut check_out = use_signal(String::new);
    let mut guests = use_signal(|| 1i32);
    let mut phone = use_signal(|| {
        user_store
            .read()
            .user
            .as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });
    let mut transaction_id = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let nights = nights_between(&check_in(), &check_out());
    let estimate = nights.map(|n| stay.price as i64 * n * guests() as i64);
    let stay_id = stay.id;

    rsx!(
        form {
            class: "card bg-base-200",
            onsubmit: move |evt| {
                evt.prevent_default();

                #[cfg(feature = "web")]
                {
                    let mut errors = Vec::new();
                    let (Ok(start), Ok(end)) = (
                        NaiveDate::parse_from_str(&check_in(), "%Y-%m-%d"),
                        NaiveDate::parse_from_str(&check_out(), "%Y-%m-%d"),
                    ) else {
                        errors.push(FieldErrorDto::new("check_out", "Pick both dates"));
                        error.set(Some(ApiError::validation(errors)));
                        return;
                    };
                    if end <= start {
                        errors.push(FieldErrorDto::new("check_out", "Check-out must be after check-in"));
                    }
                    check_phone(&mut errors, "phone", &phone());
                    if !errors.is_empty() {
                        error.set(Some(ApiError::validation(errors)));
                        return;
                    }

                    submitting.set(true);
                    spawn(async move {
                        let result = match upload_payment_screenshot(STAY_SCREENSHOT_INPUT).await {
                            Ok(screenshot_key) => {
                                let tx = transaction_id();
                                book_stay(&BookStayDto {
                                    stay_id,
                                    check_in: start,
                                    check_out: end,
                                    guests: guests(),
                                    phone: phone(),
                                    screenshot_key,
                                    transaction_id: (!tx.trim().is_empty()).then_some(tx),
                                })
                                .await
                            }
                            Err(err) => Err(err),
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
                h2 { class: "card-title", "Book {stay.place}" }
                div {
                    class: "flex gap-3 flex-wrap",
                    label {
                        class: "form-control",
                        span { class: "label-text", "Check-in" }
                        input {
                            class: "input input-bordered",
                            r#type: "date",
                            value: "{check_in}",
                            oninput: move |evt| check_in.set(evt.value()),
                        }
                        FieldError { error: error(), field: "check_in" }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text", "Check-out" }
                        input {
                            class: "input input-bordered",
                            r#type: "date",
                            value: "{check_out}",
                            oninput: move |evt| check_out.set(evt.value()),
                        }
                        FieldError { error: error(), field: "check_out" }
                    }
                    label {
                        class: "form-control w-24",
                        span { class: "label-text", "Guests" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            min: "1",
                            value: "{guests}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<i32>() {
                                    guests.set(value);
                                }
                            },
                        }
                        FieldError { error: error(), field: "guests" }
                    }
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
                    span { class: "label-text", "Payment screenshot" }
                    input {
                        id: STAY_SCREENSHOT_INPUT,
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
                }
                if let (Some(nights), Some(estimate)) = (nights, estimate) {
                    p { class: "font-semibold", "{nights} night(s), total ₹{estimate}" }
                }
                button {
                    class: "btn btn-primary w-fit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Submit booking"
                }
            }
        }
    )
}

#[component]
fn FoodMenu(food: Vec<FoodDto>) -> Element {
    rsx!(
        section {
            h2 { class: "text-xl font-semibold mb-3", "Food menu" }
            div {
                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for weekday in WEEKDAYS {
                    {
                        let meals: Vec<FoodDto> =
                            food.iter().filter(|f| f.weekday == weekday).cloned().collect();
                        rsx! {
                            if !meals.is_empty() {
                                div {
                                    key: "{weekday}",
                                    class: "card bg-base-200",
                                    div {
                                        class: "card-body gap-1",
                                        h3 { class: "card-title text-base", "{weekday}" }
                                        for meal in meals {
                                            p {
                                                key: "{meal.id}",
                                                span { class: "font-semibold", "{meal.meal_type.as_str()}: " }
                                                "{meal.items} (₹{meal.price})"
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
