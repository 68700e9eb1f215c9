use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[component]
pub fn Header() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let user_logged_in = user_store.read().user.is_some();
    let user_is_admin = user_store.read().is_admin();
    let fetch_completed = user_store.read().fetched;

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                Link {
                    to: Route::Accommodation {},
                    class: "btn btn-ghost",
                    "Stay"
                }
                Link {
                    to: Route::Support {},
                    class: "btn btn-ghost",
                    "Support"
                }
                if user_is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}
