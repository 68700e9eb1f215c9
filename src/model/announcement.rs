use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Event, Options, Parser};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    /// `body` rendered from markdown.
    pub body_html: String,
    pub attachment_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub body: String,
    /// Key returned by `/api/upload`.
    pub attachment_key: Option<String>,
    pub attachment_name: Option<String>,
}

/// Renders announcement markdown to HTML.
///
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(body: &str) -> String {
    let parser = Parser::new_ext(body, Options::all()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
