use dioxus::prelude::*;

use crate::{
    client::{
        component::{Page, Pagination, PaginationData, TicketStatusBadge},
        constant::SITE_NAME,
        model::error::ApiError,
        route::admin::{AdminTab, AdminTabs, ADMIN_PAGE_SIZE},
        router::Route,
    },
    model::{
        api::PageDto,
        support::{TicketStatus, TicketSummaryDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::admin::get_ticket_queue;

/// Support ticket queue, newest first, filtered by status.
#[component]
pub fn Admin() -> Element {
    let mut status = use_signal(|| Some(TicketStatus::Open));
    let mut page = use_signal(|| 0u64);
    #[allow(unused_mut)]
    let mut queue = use_signal(|| None::<Result<PageDto<TicketSummaryDto>, ApiError>>);

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        let result = get_ticket_queue(status(), page(), ADMIN_PAGE_SIZE).await;
        if let Err(err) = &result {
            dioxus_logger::tracing::error!("Failed to fetch ticket queue: {}", err);
        }
        queue.set(Some(result));
    });

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-2xl font-bold mb-4", "Admin" }
                AdminTabs { active_tab: AdminTab::Tickets }
                div {
                    class: "flex items-center gap-3 mb-4",
                    span { "Status" }
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| {
                            status.set(TicketStatus::parse(&evt.value()));
                            page.set(0);
                        },
                        option { value: "", selected: status().is_none(), "All" }
                        for choice in TicketStatus::ALL.iter().copied() {
                            option {
                                value: choice.as_str(),
                                selected: status() == Some(choice),
                                "{choice.as_str()}"
                            }
                        }
                    }
                }
                match queue() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                    Some(Ok(result)) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Ticket" }
                                        th { "Subject" }
                                        th { "Category" }
                                        th { "Priority" }
                                        th { "Status" }
                                        th { "Opened" }
                                    }
                                }
                                tbody {
                                    for ticket in result.items.iter() {
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
                                            td { "{ticket.category.as_str()}" }
                                            td { "{ticket.priority.as_str()}" }
                                            td { TicketStatusBadge { status: ticket.status } }
                                            td { {ticket.created_at.format("%d %b %H:%M").to_string()} }
                                        }
                                    }
                                }
                            }
                        }
                        if result.items.is_empty() {
                            p { class: "opacity-70 mt-4", "No tickets match this filter." }
                        }
                        Pagination { page, data: PaginationData::from_page(&result) }
                    },
                }
            }
        }
    }
}
