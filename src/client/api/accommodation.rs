use crate::{
    client::{
        api::helper::{get, parse_action, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        accommodation::{BookStayDto, BookingDto, FoodDto, StayDto},
        api::ActionResult,
    },
};

pub async fn get_stays() -> Result<Vec<StayDto>, ApiError> {
    let response = send_request(get("/api/accommodation/stays")).await?;
    parse_response(response).await
}

pub async fn get_food() -> Result<Vec<FoodDto>, ApiError> {
    let response = send_request(get("/api/accommodation/food")).await?;
    parse_response(response).await
}

pub async fn book_stay(payload: &BookStayDto) -> Result<ActionResult<BookingDto>, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/accommodation/bookings").body(body)).await?;
    parse_action(response).await
}

pub async fn get_my_bookings() -> Result<Vec<BookingDto>, ApiError> {
    let response = send_request(get("/api/accommodation/bookings")).await?;
    parse_response(response).await
}
