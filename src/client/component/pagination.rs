use dioxus::prelude::*;

use crate::model::api::PageDto;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl PaginationData {
    pub fn from_page<T>(page: &PageDto<T>) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }
}

#[component]
pub fn Pagination(page: Signal<u64>, data: PaginationData) -> Element {
    let total_pages = data.total_pages();
    let first = if data.total == 0 {
        0
    } else {
        data.page * data.per_page + 1
    };
    let last = ((data.page + 1) * data.per_page).min(data.total);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Showing {first} to {last} of {data.total}"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: data.page == 0,
                    onclick: move |_| {
                        if page() > 0 {
                            page.set(page() - 1);
                        }
                    },
                    "«"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm btn-disabled",
                    "Page {data.page + 1} of {total_pages}"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: data.page + 1 >= total_pages,
                    onclick: move |_| {
                        if page() + 1 < total_pages {
                            page.set(page() + 1);
                        }
                    },
                    "»"
                }
            }
        }
    )
}
