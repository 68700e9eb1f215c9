use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::announcement::AnnouncementDto,
};

pub async fn get_announcements() -> Result<Vec<AnnouncementDto>, ApiError> {
    let response = send_request(get("/api/announcements")).await?;
    parse_response(response).await
}
