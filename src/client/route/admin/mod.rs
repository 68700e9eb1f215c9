pub mod payments;
pub mod tickets;

pub use payments::AdminPayments;
pub use tickets::Admin;

use dioxus::prelude::*;

use crate::client::router::Route;

/// Admin entries per page.
pub(super) const ADMIN_PAGE_SIZE: u64 = 20;

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Tickets,
    Payments,
}

#[component]
pub fn AdminTabs(active_tab: AdminTab) -> Element {
    let tab_class = move |tab: AdminTab| {
        if tab == active_tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx!(
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6",
            Link { class: "{tab_class(AdminTab::Tickets)}", to: Route::Admin {}, "Support queue" }
            Link { class: "{tab_class(AdminTab::Payments)}", to: Route::AdminPayments {}, "Payments" }
        }
    )
}
