//! PDF invoices attached to confirmation emails.
//!
//! Both variants render a single A4 page through `InvoiceCanvas`; they differ only in
//! the rows drawn. Any drawing or serialization error is returned, never a partial
//! document.

mod canvas;

use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::document::DocumentError;
use canvas::InvoiceCanvas;

const FOOTER_NOTE: &str = "Questions? Raise a support ticket from your dashboard.";

pub struct RegistrationInvoice {
    pub invoice_number: String,
    pub issued_on: DateTime<Utc>,
    pub participant_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub event_name: String,
    pub venue: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub amount: i32,
    pub transaction_id: Option<String>,
}

pub struct AccommodationInvoice {
    pub invoice_number: String,
    pub issued_on: DateTime<Utc>,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub place: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub rate: i32,
    pub amount: i32,
    pub transaction_id: Option<String>,
}

pub fn render_registration_invoice(invoice: &RegistrationInvoice) -> Result<Vec<u8>, DocumentError> {
    let mut canvas = InvoiceCanvas::new("Registration Invoice")?;

    canvas.header(
        "Registration Invoice",
        &invoice.invoice_number,
        &invoice.issued_on.format("%d %b %Y").to_string(),
    );

    canvas.section("Participant");
    canvas.row("Name", &invoice.participant_name);
    canvas.row("Email", &invoice.email);
    canvas.row("Phone", &invoice.phone);
    canvas.row("College", &invoice.college);

    canvas.section("Event");
    canvas.row("Event", &invoice.event_name);
    canvas.row("Venue", invoice.venue.as_deref().unwrap_or("To be announced"));
    canvas.row(
        "Starts",
        &invoice.starts_at.format("%d %b %Y, %H:%M UTC").to_string(),
    );

    canvas.section("Payment");
    canvas.row(
        "Transaction ID",
        invoice.transaction_id.as_deref().unwrap_or("-"),
    );
    canvas.row("Status", "Verified");
    canvas.total("Total paid", invoice.amount);

    canvas.finish(FOOTER_NOTE)
}

pub fn render_accommodation_invoice(
    invoice: &AccommodationInvoice,
) -> Result<Vec<u8>, DocumentError> {
    let mut canvas = InvoiceCanvas::new("Accommodation Invoice")?;

    canvas.header(
        "Accommodation Invoice",
        &invoice.invoice_number,
        &invoice.issued_on.format("%d %b %Y").to_string(),
    );

    canvas.section("Guest");
    canvas.row("Name", &invoice.guest_name);
    canvas.row("Email", &invoice.email);
    canvas.row("Phone", &invoice.phone);

    canvas.section("Stay");
    canvas.row("Place", &invoice.place);
    canvas.row("Check-in", &invoice.check_in.format("%d %b %Y").to_string());
    canvas.row("Check-out", &invoice.check_out.format("%d %b %Y").to_string());
    canvas.row(
        "Nights",
        &(invoice.check_out - invoice.check_in).num_days().to_string(),
    );
    canvas.row("Guests", &invoice.guests.to_string());
    canvas.row("Rate", &format!("INR {} per guest per night", invoice.rate));

    canvas.section("Payment");
    canvas.row(
        "Transaction ID",
        invoice.transaction_id.as_deref().unwrap_or("-"),
    );
    canvas.total("Total paid", invoice.amount);

    canvas.finish(FOOTER_NOTE)
}
