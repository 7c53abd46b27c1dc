use std::sync::Arc;

use schemagate_sink::SchemaSink;
use schemars::JsonSchema;

use crate::error::{RegistryError, Result, SinkFailure};

/// Writes a schema document to every registered sink.
///
/// Sinks are attempted in registration order and a failing sink never
/// prevents the remaining sinks from being attempted; the failures collected
/// along the way come back together as [`RegistryError::Aggregate`].
/// Registration happens before the first produce call; the list is not
/// meant to change while writes are in flight.
#[derive(Default)]
pub struct SchemaProducer {
    sinks: Vec<Arc<dyn SchemaSink>>,
}

impl SchemaProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sink to the registration list. Duplicates are permitted and
    /// each registration receives its own write.
    pub fn register(&mut self, sink: Arc<dyn SchemaSink>) {
        self.sinks.push(sink);
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Write `schema` at `path` to every registered sink.
    pub async fn produce(&self, schema: &str, path: &str) -> Result<()> {
        if schema.trim().is_empty() {
            return Err(RegistryError::EmptySchema);
        }
        if path.trim().is_empty() {
            return Err(RegistryError::EmptyPath);
        }
        if self.sinks.is_empty() {
            return Err(RegistryError::NoSinks);
        }

        let mut failures = Vec::new();
        for sink in &self.sinks {
            if let Err(error) = sink.put(schema, path).await {
                tracing::warn!(sink = sink.base_location(), %error, "sink write failed");
                failures.push(SinkFailure {
                    sink: sink.base_location().to_string(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Aggregate {
                attempted: self.sinks.len(),
                failures,
            })
        }
    }

    /// Generate the schema for `T` and write it to every registered sink.
    ///
    /// A generation failure short-circuits before any sink is touched.
    pub async fn produce_for<T: JsonSchema>(&self, path: &str) -> Result<()> {
        let schema = schemars::schema_for!(T);
        let text = serde_json::to_string_pretty(&schema)
            .map_err(|err| RegistryError::Generate(err.to_string()))?;
        self.produce(&text, path).await
    }
}
