use crate::{
    client::{
        api::helper::{get, parse_action, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::ActionResult,
        support::{
            CreateResponseDto, CreateTicketDto, CreatedTicketDto, ResponseDto, TicketDetailDto,
            TicketSummaryDto,
        },
    },
};

pub async fn create_ticket(
    payload: &CreateTicketDto,
) -> Result<ActionResult<CreatedTicketDto>, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/support/tickets").body(body)).await?;
    parse_action(response).await
}

pub async fn get_my_tickets() -> Result<Vec<TicketSummaryDto>, ApiError> {
    let response = send_request(get("/api/support/tickets")).await?;
    parse_response(response).await
}

pub async fn get_ticket(number: &str) -> Result<TicketDetailDto, ApiError> {
    let url = format!("/api/support/tickets/{}", number);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn add_response(
    number: &str,
    payload: &CreateResponseDto,
) -> Result<ActionResult<ResponseDto>, ApiError> {
    let url = format!("/api/support/tickets/{}/responses", number);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_action(response).await
}
