use dioxus::prelude::*;

use crate::client::model::error::ApiError;

/// Renders the message for `field` when the last submission failed on it.
#[component]
pub fn FieldError(error: Option<ApiError>, field: &'static str) -> Element {
    let message = error.as_ref().and_then(|e| e.field(field)).map(str::to_string);

    rsx!(
        if let Some(message) = message {
            p { class: "text-error text-sm", "{message}" }
        }
    )
}
