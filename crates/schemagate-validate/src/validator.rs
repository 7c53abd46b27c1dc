use schemagate_registry::SchemaConsumer;
use serde_json::Value;

use crate::error::{Result, ValidateError, Violation};

/// Validates JSON payloads against schemas located by path.
///
/// Holds one consumer and is otherwise stateless; concurrent calls against
/// different payloads and paths are independent.
pub struct SchemaValidator {
    consumer: SchemaConsumer,
}

impl SchemaValidator {
    pub fn new(consumer: SchemaConsumer) -> Self {
        Self { consumer }
    }

    /// The consumer this validator fetches schemas through.
    pub fn consumer(&self) -> &SchemaConsumer {
        &self.consumer
    }

    /// Check `payload` against the schema document at `path`.
    ///
    /// `Ok(())` means the payload conforms. Violations come back together on
    /// [`ValidateError::ValidationFailed`], in engine order.
    pub async fn validate(&self, payload: &str, path: &str) -> Result<()> {
        if payload.trim().is_empty() {
            return Err(ValidateError::EmptyPayload);
        }
        if path.trim().is_empty() {
            return Err(ValidateError::EmptyPath);
        }

        let schema_text = self.consumer.consume(path).await?;
        if schema_text.trim().is_empty() {
            return Err(ValidateError::SchemaNotFound {
                path: path.to_string(),
                sink: self.consumer.base_location().to_string(),
            });
        }

        let schema: Value =
            serde_json::from_str(&schema_text).map_err(|err| ValidateError::SchemaMalformed {
                path: path.to_string(),
                sink: self.consumer.base_location().to_string(),
                reason: err.to_string(),
            })?;
        let compiled =
            jsonschema::validator_for(&schema).map_err(|err| ValidateError::SchemaMalformed {
                path: path.to_string(),
                sink: self.consumer.base_location().to_string(),
                reason: err.to_string(),
            })?;

        let value: Value = serde_json::from_str(payload)?;
        let violations: Vec<Violation> = compiled.iter_errors(&value).map(violation).collect();
        if violations.is_empty() {
            tracing::debug!(path, "payload conforms to schema");
            Ok(())
        } else {
            Err(ValidateError::ValidationFailed {
                path: path.to_string(),
                sink: self.consumer.base_location().to_string(),
                violations,
            })
        }
    }
}

fn violation(err: jsonschema::ValidationError<'_>) -> Violation {
    let schema_path = err.schema_path().to_string();
    let keyword = schema_path
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("schema")
        .to_string();
    Violation {
        keyword,
        instance_path: err.instance_path().to_string(),
        message: err.to_string(),
    }
}
