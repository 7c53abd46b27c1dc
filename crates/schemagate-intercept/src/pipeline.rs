use schemagate_validate::SchemaValidator;

use crate::envelope::{Envelope, SCHEMA_PATH_KEY};
use crate::error::{InterceptError, Result};

/// Run the enforcement pipeline against one envelope.
///
/// The steps run in a fixed order: the metadata must name a schema, the
/// payload must be present and decodable, and the payload must conform.
/// Both guards in this crate call through here; custom transports can too.
pub async fn enforce(validator: &SchemaValidator, envelope: &Envelope) -> Result<()> {
    let path = envelope
        .schema_path()
        .ok_or_else(|| InterceptError::MetadataMissing {
            key: SCHEMA_PATH_KEY.to_string(),
        })?;
    if envelope.payload.is_empty() {
        return Err(InterceptError::EmptyPayload);
    }
    let payload =
        std::str::from_utf8(&envelope.payload).map_err(|_| InterceptError::PayloadNotUtf8)?;

    validator.validate(payload, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use schemagate_registry::SchemaConsumer;
    use schemagate_sink::{MemorySink, SchemaSink};
    use schemagate_validate::ValidateError;

    use super::*;

    async fn validator_with_default_schema() -> SchemaValidator {
        let sink = Arc::new(MemorySink::new());
        sink.put(
            r#"{"type":"object","properties":{"hello":{"type":"string"}},"required":["hello"]}"#,
            "default.json",
        )
        .await
        .expect("put should succeed");
        SchemaValidator::new(SchemaConsumer::new(sink))
    }

    #[tokio::test]
    async fn conforming_envelope_passes() {
        let validator = validator_with_default_schema().await;
        let envelope = Envelope::new(r#"{"hello":"world"}"#).with_schema_path("default.json");
        enforce(&validator, &envelope)
            .await
            .expect("conforming envelope should pass");
    }

    #[tokio::test]
    async fn missing_metadata_fails_before_validation() {
        let validator = validator_with_default_schema().await;
        let envelope = Envelope::new(r#"{"hello":"world"}"#);
        assert!(matches!(
            enforce(&validator, &envelope).await,
            Err(InterceptError::MetadataMissing { key }) if key == SCHEMA_PATH_KEY
        ));
    }

    #[tokio::test]
    async fn empty_payload_fails() {
        let validator = validator_with_default_schema().await;
        let envelope = Envelope::default().with_schema_path("default.json");
        assert!(matches!(
            enforce(&validator, &envelope).await,
            Err(InterceptError::EmptyPayload)
        ));
    }

    #[tokio::test]
    async fn non_utf8_payload_fails() {
        let validator = validator_with_default_schema().await;
        let envelope =
            Envelope::new(vec![0xff, 0xfe, 0xfd]).with_schema_path("default.json");
        assert!(matches!(
            enforce(&validator, &envelope).await,
            Err(InterceptError::PayloadNotUtf8)
        ));
    }

    #[tokio::test]
    async fn violations_surface_through_the_pipeline() {
        let validator = validator_with_default_schema().await;
        let envelope = Envelope::new(r#"{"hello":42}"#).with_schema_path("default.json");
        assert!(matches!(
            enforce(&validator, &envelope).await,
            Err(InterceptError::Validation(
                ValidateError::ValidationFailed { .. }
            ))
        ));
    }
}
