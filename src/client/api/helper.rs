use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::model::error::ApiError,
    model::api::{ActionErrorDto, ActionResult},
};

/// Reads an error envelope, falling back to the raw body.
async fn parse_error(response: Response) -> ApiError {
    let status = response.status() as u64;
    let text = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ActionErrorDto>(&text) {
        Ok(dto) => ApiError {
            status,
            message: dto.message,
            errors: dto.errors.unwrap_or_default(),
        },
        Err(_) if text.is_empty() => ApiError::new(status, "Unknown error"),
        Err(_) => ApiError::new(status, text),
    }
}

/// Parses a success envelope, keeping its message for toasts.
pub async fn parse_action<T: DeserializeOwned>(
    response: Response,
) -> Result<ActionResult<T>, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<ActionResult<T>>()
            .await
            .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
    } else {
        Err(parse_error(response).await)
    }
}

/// Parses a success envelope and returns its data.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    parse_action::<T>(response)
        .await?
        .data
        .ok_or_else(|| ApiError::new(500, "Response is missing data"))
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}

/// Percent-encodes a query parameter value.
pub fn encode_query(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
