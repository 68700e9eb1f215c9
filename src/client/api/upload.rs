use crate::{
    client::{
        api::helper::{encode_query, get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::FieldErrorDto,
        attachment::{UploadPurpose, MAX_ATTACHMENTS},
        support::AttachmentInputDto,
        upload::{PresignUploadDto, PresignedUploadDto, ViewAttachmentDto},
    },
};

pub async fn presign_support_upload(
    payload: &PresignUploadDto,
) -> Result<PresignedUploadDto, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/s3/support-upload").body(body)).await?;
    parse_response(response).await
}

pub async fn presign_payment_upload(
    payload: &PresignUploadDto,
) -> Result<PresignedUploadDto, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/s3/payment-upload").body(body)).await?;
    parse_response(response).await
}

pub async fn view_attachment(key: &str) -> Result<ViewAttachmentDto, ApiError> {
    let url = format!("/api/view-attachment?key={}", encode_query(key));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn view_announcement_attachment(id: i32) -> Result<ViewAttachmentDto, ApiError> {
    let url = format!("/api/view-announcement-attachment?id={}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Metadata of a file picked in an `<input type="file">`.
#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

/// Files currently selected in the input with the given id.
pub async fn selected_files(input_id: &str) -> Result<Vec<SelectedFile>, ApiError> {
    let id = serialize_json(&input_id)?;
    let js = format!(
        r#"
        const input = document.getElementById({id});
        if (!input || !input.files) {{ return []; }}
        return Array.from(input.files).map(f => ({{
            name: f.name,
            size: f.size,
            content_type: f.type || "application/octet-stream"
        }}));
        "#
    );

    dioxus::prelude::document::eval(&js)
        .join::<Vec<SelectedFile>>()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to read selected files: {:?}", e)))
}

/// PUTs the `index`th selected file straight to a pre-signed storage URL.
async fn put_file(
    input_id: &str,
    index: usize,
    url: &str,
    content_type: &str,
) -> Result<(), ApiError> {
    let id = serialize_json(&input_id)?;
    let url = serialize_json(&url)?;
    let content_type = serialize_json(&content_type)?;
    let js = format!(
        r#"
        const file = document.getElementById({id}).files[{index}];
        const response = await fetch({url}, {{
            method: "PUT",
            body: file,
            headers: {{ "Content-Type": {content_type} }}
        }});
        return response.ok;
        "#
    );

    let ok = dioxus::prelude::document::eval(&js)
        .join::<bool>()
        .await
        .map_err(|e| ApiError::new(500, format!("Upload failed: {:?}", e)))?;

    if ok {
        Ok(())
    } else {
        Err(ApiError::new(502, "Upload to storage failed"))
    }
}

/// Checks, signs and uploads every selected support attachment.
pub async fn upload_support_files(input_id: &str) -> Result<Vec<AttachmentInputDto>, ApiError> {
    let files = selected_files(input_id).await?;
    if files.len() > MAX_ATTACHMENTS {
        return Err(ApiError::validation(vec![FieldErrorDto::new(
            "attachments",
            format!("At most {} attachments are allowed", MAX_ATTACHMENTS),
        )]));
    }

    let mut uploaded = Vec::with_capacity(files.len());
    for (index, file) in files.into_iter().enumerate() {
        if let Err(message) = UploadPurpose::Support.check(&file.content_type, file.size) {
            return Err(ApiError::validation(vec![FieldErrorDto::new(
                "attachments",
                format!("{}: {}", file.name, message),
            )]));
        }

        let presigned = presign_support_upload(&PresignUploadDto {
            file_name: file.name.clone(),
            content_type: file.content_type.clone(),
            size: file.size,
        })
        .await?;
        put_file(input_id, index, &presigned.upload_url, &file.content_type).await?;

        uploaded.push(AttachmentInputDto {
            key: presigned.key,
            file_name: file.name,
            content_type: file.content_type,
            size: file.size,
        });
    }

    Ok(uploaded)
}

/// Checks, signs and uploads the selected payment screenshot, returning its key.
pub async fn upload_payment_screenshot(input_id: &str) -> Result<String, ApiError> {
    let file = selected_files(input_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            ApiError::validation(vec![FieldErrorDto::new(
                "screenshot",
                "Payment screenshot is required",
            )])
        })?;

    if let Err(message) = UploadPurpose::Payment.check(&file.content_type, file.size) {
        return Err(ApiError::validation(vec![FieldErrorDto::new(
            "screenshot",
            message,
        )]));
    }

    let presigned = presign_payment_upload(&PresignUploadDto {
        file_name: file.name,
        content_type: file.content_type.clone(),
        size: file.size,
    })
    .await?;
    put_file(input_id, 0, &presigned.upload_url, &file.content_type).await?;

    Ok(presigned.key)
}
