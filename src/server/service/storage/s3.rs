use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
    primitives::ByteStream,
    Client,
};
use std::time::Duration;

use crate::server::{
    config::{public_host, StorageConfig},
    error::storage::StorageError,
    service::storage::ObjectStorage,
};

/// S3-compatible storage (Tigris at `t3.storage.dev` by default).
pub struct S3Storage {
    client: Client,
    bucket: String,
    public_host: String,
}

impl S3Storage {
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "static",
        );

        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint)
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            public_host: public_host(&config.bucket, &config.endpoint),
        }
    }

    fn presigning(key: &str, operation: &'static str, expires_in: Duration) -> Result<PresigningConfig, StorageError> {
        PresigningConfig::expires_in(expires_in).map_err(|e| StorageError::Presign {
            operation,
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(Self::presigning(key, "PUT", expires_in)?)
            .await
            .map_err(|e| StorageError::Presign {
                operation: "PUT",
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(request.uri().to_string())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(Self::presigning(key, "GET", expires_in)?)
            .await
            .map_err(|e| StorageError::Presign {
                operation: "GET",
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(request.uri().to_string())
    }

    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().map(|se| se.is_no_such_key()).unwrap_or(false) {
                    StorageError::NotFound(key.to_string())
                } else {
                    StorageError::Download {
                        key: key.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let data = output.body.collect().await.map_err(|e| StorageError::Download {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://{}/{}", self.public_host, key)
    }
}
