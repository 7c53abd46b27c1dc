use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, SinkError};
use crate::path::sanitize;
use crate::sink::SchemaSink;

/// In-memory sink for tests and embedders that govern schemas without
/// storage I/O.
#[derive(Default)]
pub struct MemorySink {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SchemaSink for MemorySink {
    async fn get(&self, path: &str) -> Result<String> {
        let key = sanitize(path, self.base_location());
        self.entries
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or(SinkError::NotFound { path: key })
    }

    async fn put(&self, schema: &str, path: &str) -> Result<()> {
        let key = sanitize(path, self.base_location());
        self.entries.write().await.insert(key, schema.to_string());
        Ok(())
    }

    fn base_location(&self) -> &str {
        "memory"
    }
}
