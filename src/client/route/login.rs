use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[component]
pub fn Login() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let logged_in = user_store.read().user.is_some();
    let fetch_completed = user_store.read().fetched;

    use_effect(use_reactive!(|logged_in| {
        if logged_in {
            nav.push(Route::Home {});
        }
    }));

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !fetch_completed || logged_in {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                p {
                    class: "text-3xl font-bold",
                    {SITE_NAME}
                }
                p {
                    class: "opacity-70",
                    "Register for events, book a stay and reach the organisers."
                }
                a {
                    href: "/api/auth/login",
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaGoogle
                    }
                    "Sign in with Google"
                }
            }
        }
    }
}
