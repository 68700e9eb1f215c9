use crate::{
    client::{
        api::helper::{get, parse_action, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        accommodation::BookingDto,
        api::{ActionResult, PageDto},
        participation::{ParticipationDto, ParticipationStatus},
        support::{TicketStatus, TicketSummaryDto, UpdateTicketDto},
    },
};

pub async fn get_ticket_queue(
    status: Option<TicketStatus>,
    page: u64,
    entries: u64,
) -> Result<PageDto<TicketSummaryDto>, ApiError> {
    let mut url = format!("/api/admin/support/tickets?page={}&entries={}", page, entries);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_ticket(
    number: &str,
    payload: &UpdateTicketDto,
) -> Result<ActionResult<TicketSummaryDto>, ApiError> {
    let url = format!("/api/admin/support/tickets/{}", number);
    let body = serialize_json(payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_action(response).await
}

pub async fn get_participations(
    status: Option<ParticipationStatus>,
    page: u64,
    entries: u64,
) -> Result<PageDto<ParticipationDto>, ApiError> {
    let mut url = format!("/api/admin/participations?page={}&entries={}", page, entries);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn verify_payment(id: i32) -> Result<ActionResult<ParticipationDto>, ApiError> {
    let url = format!("/api/admin/participations/{}/verify", id);
    let response = send_request(put(&url)).await?;
    parse_action(response).await
}

pub async fn cancel_participation(id: i32) -> Result<ActionResult<ParticipationDto>, ApiError> {
    let url = format!("/api/admin/participations/{}/cancel", id);
    let response = send_request(put(&url)).await?;
    parse_action(response).await
}

pub async fn get_bookings(
    status: Option<ParticipationStatus>,
    page: u64,
    entries: u64,
) -> Result<PageDto<BookingDto>, ApiError> {
    let mut url = format!("/api/admin/bookings?page={}&entries={}", page, entries);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn verify_booking(id: i32) -> Result<ActionResult<BookingDto>, ApiError> {
    let url = format!("/api/admin/bookings/{}/verify", id);
    let response = send_request(put(&url)).await?;
    parse_action(response).await
}
