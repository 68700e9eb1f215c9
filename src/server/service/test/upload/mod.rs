use super::principal;
use crate::{
    model::{attachment::DisplayMode, upload::PresignUploadDto},
    server::{
        error::AppError,
        service::{storage::memory::MemoryStorage, upload::UploadService},
    },
};
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory};

mod presign;
mod view_attachment;

const TTL: Duration = Duration::from_secs(300);

fn file(file_name: &str, content_type: &str, size: u64) -> PresignUploadDto {
    PresignUploadDto {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        size,
    }
}
