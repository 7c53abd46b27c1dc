use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, SinkError};
use crate::path::sanitize_in_container;
use crate::sink::SchemaSink;

/// Contract an object-store client must satisfy to back an [`ObjectSink`].
///
/// Implementations wrap a concrete store (blob storage, S3-compatible, a
/// fake in tests). The sink owns addressing and the two-tier existence
/// checks; the client only answers primitive questions about containers and
/// objects.
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    async fn container_exists(&self, container: &str) -> Result<bool>;

    async fn create_container(&self, container: &str) -> Result<()>;

    async fn object_exists(&self, container: &str, key: &str) -> Result<bool>;

    async fn read_object(&self, container: &str, key: &str) -> Result<String>;

    async fn write_object(&self, container: &str, key: &str, body: &str) -> Result<()>;
}

/// Sink addressing one container of an object store.
///
/// Reads perform a two-tier existence check: the container must exist before
/// the object is looked up, so callers can tell a missing container from a
/// missing document. Writes can create the container on demand when the sink
/// was built with [`ObjectSink::with_container_creation`].
pub struct ObjectSink {
    client: Arc<dyn ObjectStoreClient>,
    base_location: String,
    container: String,
    create_missing_container: bool,
}

impl ObjectSink {
    /// Create a sink over `client`, rejecting blank base locations and
    /// container names. The container is never created implicitly.
    pub fn new(
        client: Arc<dyn ObjectStoreClient>,
        base_location: impl Into<String>,
        container: impl Into<String>,
    ) -> Result<Self> {
        let base_location = base_location.into();
        if base_location.trim().is_empty() {
            return Err(SinkError::EmptyBaseLocation);
        }
        let container = container.into();
        if container.trim().is_empty() {
            return Err(SinkError::EmptyContainer);
        }
        Ok(Self {
            client,
            base_location,
            container,
            create_missing_container: false,
        })
    }

    /// Allow writes to create the container when it does not exist yet.
    pub fn with_container_creation(mut self) -> Self {
        self.create_missing_container = true;
        self
    }

    /// The container this sink addresses.
    pub fn container(&self) -> &str {
        &self.container
    }

    fn resolve(&self, path: &str) -> String {
        sanitize_in_container(path, &self.base_location, &self.container)
    }
}

#[async_trait]
impl SchemaSink for ObjectSink {
    async fn get(&self, path: &str) -> Result<String> {
        let key = self.resolve(path);
        if !self.client.container_exists(&self.container).await? {
            return Err(SinkError::ContainerNotFound {
                container: self.container.clone(),
            });
        }
        if !self.client.object_exists(&self.container, &key).await? {
            return Err(SinkError::ObjectNotFound {
                container: self.container.clone(),
                key,
            });
        }
        self.client.read_object(&self.container, &key).await
    }

    async fn put(&self, schema: &str, path: &str) -> Result<()> {
        let key = self.resolve(path);
        if !self.client.container_exists(&self.container).await? {
            if !self.create_missing_container {
                return Err(SinkError::ContainerNotFound {
                    container: self.container.clone(),
                });
            }
            self.client.create_container(&self.container).await?;
            tracing::debug!(container = %self.container, "container created on demand");
        }
        self.client.write_object(&self.container, &key, schema).await
    }

    fn base_location(&self) -> &str {
        &self.base_location
    }
}
