use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex, time::Duration};

use crate::server::{error::storage::StorageError, service::storage::ObjectStorage};

/// In-memory storage for tests. Signed URLs are fake but carry the key and TTL.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, (String, Vec<u8>)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, content_type: &str, bytes: &[u8]) {
        if let Ok(mut objects) = self.objects.lock() {
            objects.insert(key.to_string(), (content_type.to_string(), bytes.to_vec()));
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .lock()
            .map(|objects| objects.contains_key(key))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn presign_put(
        &self,
        key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        Ok(format!(
            "memory://put/{}?expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        Ok(format!(
            "memory://get/{}?expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        self.insert(key, content_type, &bytes);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .lock()
            .map_err(|e| StorageError::Download {
                key: key.to_string(),
                reason: e.to_string(),
            })?
            .get(key)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut objects) = self.objects.lock() {
            objects.remove(key);
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://techfest-uploads.t3.storage.dev/{}", key)
    }
}
