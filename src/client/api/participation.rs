use crate::{
    client::{
        api::helper::{get, parse_action, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::ActionResult,
        participation::{CheckoutDto, ParticipationDto, RegistrationDto, ReuploadPaymentDto},
    },
};

pub async fn register(
    event_id: i32,
    payload: &RegistrationDto,
) -> Result<ActionResult<ParticipationDto>, ApiError> {
    let url = format!("/api/events/{}/register", event_id);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_action(response).await
}

pub async fn checkout(
    event_id: i32,
    payload: &CheckoutDto,
) -> Result<ActionResult<ParticipationDto>, ApiError> {
    let url = format!("/api/events/{}/checkout", event_id);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_action(response).await
}

pub async fn get_my_participations() -> Result<Vec<ParticipationDto>, ApiError> {
    let response = send_request(get("/api/participations")).await?;
    parse_response(response).await
}

pub async fn reupload_payment(
    payload: &ReuploadPaymentDto,
) -> Result<ActionResult<ParticipationDto>, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/reupload-payment").body(body)).await?;
    parse_action(response).await
}
