use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME, model::toast::Toasts, router::Route, store::user::UserState,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_store = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(Toasts::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                let user = match result {
                    Ok(user) => user.clone(),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch user: {}", err);
                        None
                    }
                };
                user_store.set(UserState {
                    user,
                    fetched: true,
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Registrations, support and accommodation for {SITE_NAME}"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
