//! HTML bodies for transactional email.

use chrono::{DateTime, NaiveDate, Utc};
use pulldown_cmark::escape::escape_html;

pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    // Writing into a `String` cannot fail.
    let _ = escape_html(&mut out, value);
    out
}

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2563eb;">{title}</h2>
        {content}
        <p style="color: #666; font-size: 12px; margin-top: 40px;">
            This is an automated message from the Techfest team.
        </p>
    </div>
</body>
</html>"#,
        title = escape(title),
        content = content,
    )
}

fn button(href: &str, label: &str) -> String {
    format!(
        r#"<p style="margin: 30px 0;"><a href="{}" style="display: inline-block; background-color: #2563eb; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px;">{}</a></p>"#,
        escape(href),
        escape(label)
    )
}

pub struct RegistrationEmail<'a> {
    pub name: &'a str,
    pub event_name: &'a str,
    pub starts_at: DateTime<Utc>,
    pub venue: Option<&'a str>,
    /// `None` for free events.
    pub amount: Option<i32>,
    pub app_url: &'a str,
}

pub fn registration_confirmation(email: &RegistrationEmail) -> RenderedEmail {
    let payment = match email.amount {
        Some(amount) => format!(
            "<p>We have verified your payment of <strong>INR {}</strong>. Your invoice is attached.</p>",
            amount
        ),
        None => "<p>This event is free, no payment is required.</p>".to_string(),
    };
    let venue = email
        .venue
        .map(|v| format!("<p>Venue: {}</p>", escape(v)))
        .unwrap_or_default();

    let content = format!(
        "<p>Hi {},</p><p>Your registration for <strong>{}</strong> is confirmed.</p>{}<p>Starts: {}</p>{}{}",
        escape(email.name),
        escape(email.event_name),
        payment,
        email.starts_at.format("%d %b %Y, %H:%M UTC"),
        venue,
        button(&format!("{}/", email.app_url), "View your registrations"),
    );

    RenderedEmail {
        subject: format!("Registration confirmed: {}", email.event_name),
        html: layout("Registration confirmed", &content),
    }
}

pub struct AccommodationEmail<'a> {
    pub name: &'a str,
    pub place: &'a str,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub amount: i32,
}

pub fn accommodation_confirmation(email: &AccommodationEmail) -> RenderedEmail {
    let content = format!(
        "<p>Hi {},</p><p>Your stay at <strong>{}</strong> is confirmed for {} guest(s) from {} to {}.</p><p>Amount paid: <strong>INR {}</strong>. Your invoice is attached.</p>",
        escape(email.name),
        escape(email.place),
        email.guests,
        email.check_in.format("%d %b %Y"),
        email.check_out.format("%d %b %Y"),
        email.amount,
    );

    RenderedEmail {
        subject: format!("Accommodation confirmed: {}", email.place),
        html: layout("Accommodation confirmed", &content),
    }
}

pub struct TicketResponseEmail<'a> {
    pub name: &'a str,
    pub ticket_number: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub app_url: &'a str,
}

pub fn ticket_response(email: &TicketResponseEmail) -> RenderedEmail {
    let message = escape(email.message).replace('\n', "<br>");
    let content = format!(
        "<p>Hi {},</p><p>Our support team replied to your ticket <strong>{}</strong> ({}):</p><blockquote style=\"border-left: 3px solid #2563eb; margin: 0; padding-left: 12px;\">{}</blockquote>{}",
        escape(email.name),
        escape(email.ticket_number),
        escape(email.subject),
        message,
        button(
            &format!("{}/support/{}", email.app_url, email.ticket_number),
            "View ticket"
        ),
    );

    RenderedEmail {
        subject: format!("[{}] New response to your ticket", email.ticket_number),
        html: layout("New response to your ticket", &content),
    }
}

pub struct TicketCreatedEmail<'a> {
    pub name: &'a str,
    pub ticket_number: &'a str,
    pub subject: &'a str,
    pub app_url: &'a str,
}

pub fn ticket_created(email: &TicketCreatedEmail) -> RenderedEmail {
    let content = format!(
        "<p>Hi {},</p><p>We received your support request <strong>{}</strong>: {}.</p><p>We will get back to you as soon as possible.</p>{}",
        escape(email.name),
        escape(email.ticket_number),
        escape(email.subject),
        button(
            &format!("{}/support/{}", email.app_url, email.ticket_number),
            "View ticket"
        ),
    );

    RenderedEmail {
        subject: format!("[{}] We received your request", email.ticket_number),
        html: layout("Support request received", &content),
    }
}
