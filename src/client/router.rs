use dioxus::prelude::*;

use crate::client::component::{page::NotFound, Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Accommodation, Admin, AdminPayments, EventPage, Home, Login, Support, Ticket,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Home {},

            #[route("/events/:slug")]
            EventPage { slug: String },

            #[route("/support")]
            Support {},

            #[route("/support/:number")]
            Ticket { number: String },

            #[route("/accommodation")]
            Accommodation {},
        #[end_layout]

        #[layout(RequiresAdmin)]
        #[nest("/admin")]
            #[route("/")]
            Admin {},

            #[route("/payments")]
            AdminPayments {},
        #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
