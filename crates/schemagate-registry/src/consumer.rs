use std::sync::Arc;

use schemagate_sink::SchemaSink;

use crate::error::{RegistryError, Result};

/// Reads schema documents from exactly one sink.
///
/// A pure pass-through: storage failures, including the not-found variants,
/// surface unchanged so callers keep the full failure taxonomy of the
/// backend.
#[derive(Clone)]
pub struct SchemaConsumer {
    sink: Arc<dyn SchemaSink>,
}

impl SchemaConsumer {
    pub fn new(sink: Arc<dyn SchemaSink>) -> Self {
        Self { sink }
    }

    /// Fetch the schema document at `path` from the configured sink.
    pub async fn consume(&self, path: &str) -> Result<String> {
        if path.trim().is_empty() {
            return Err(RegistryError::EmptyPath);
        }
        Ok(self.sink.get(path).await?)
    }

    /// Base location of the configured sink, for diagnostics.
    pub fn base_location(&self) -> &str {
        self.sink.base_location()
    }
}
