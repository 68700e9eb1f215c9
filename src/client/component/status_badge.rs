use dioxus::prelude::*;

use crate::model::{participation::ParticipationStatus, support::TicketStatus};

#[component]
pub fn ParticipationBadge(status: ParticipationStatus) -> Element {
    let (class, label) = match status {
        ParticipationStatus::Registered => ("badge-ghost", "Registered"),
        ParticipationStatus::PaymentSubmitted => ("badge-warning", "Payment submitted"),
        ParticipationStatus::Confirmed => ("badge-success", "Confirmed"),
        ParticipationStatus::Cancelled => ("badge-error", "Cancelled"),
    };

    rsx!(span { class: "badge {class}", "{label}" })
}

#[component]
pub fn TicketStatusBadge(status: TicketStatus) -> Element {
    let class = match status {
        TicketStatus::Open => "badge-info",
        TicketStatus::InProgress => "badge-warning",
        TicketStatus::Resolved => "badge-success",
        TicketStatus::Closed => "badge-ghost",
    };

    rsx!(span { class: "badge {class}", "{status.as_str()}" })
}
