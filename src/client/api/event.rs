use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::event::EventDto,
};

pub async fn get_events() -> Result<Vec<EventDto>, ApiError> {
    let response = send_request(get("/api/events")).await?;
    parse_response(response).await
}

pub async fn get_event(slug: &str) -> Result<EventDto, ApiError> {
    let url = format!("/api/events/{}", slug);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
