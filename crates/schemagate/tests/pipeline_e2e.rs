use std::path::PathBuf;
use std::sync::Arc;

use schemagate::registry::{RegistryError, SchemaConsumer, SchemaProducer};
use schemagate::sink::{FsSink, SinkError};
use schemagate::validate::{SchemaValidator, ValidateError};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "schemagate-e2e-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn fs_sink(dir: &std::path::Path) -> Arc<FsSink> {
    Arc::new(FsSink::new(dir.display().to_string()).expect("sink should build"))
}

#[tokio::test]
async fn produce_consume_validate_round_trip() {
    let dir = unique_temp_dir("round-trip");
    let sink = fs_sink(&dir);

    let mut producer = SchemaProducer::new();
    producer.register(sink.clone());
    producer
        .produce(r#"{"type":"string"}"#, "default.json")
        .await
        .expect("produce should succeed");

    let consumer = SchemaConsumer::new(sink);
    let fetched = consumer
        .consume("default.json")
        .await
        .expect("consume should return the stored document");
    assert_eq!(fetched, r#"{"type":"string"}"#);

    let validator = SchemaValidator::new(consumer);
    validator
        .validate(r#""hello""#, "default.json")
        .await
        .expect("string payload should conform");

    match validator.validate("42", "default.json").await {
        Err(ValidateError::ValidationFailed { violations, .. }) => {
            assert!(!violations.is_empty());
        }
        other => panic!("expected validation failure, got {other:?}"),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn fan_out_reaches_every_directory() {
    let first = unique_temp_dir("fan-out-a");
    let second = unique_temp_dir("fan-out-b");

    let mut producer = SchemaProducer::new();
    producer.register(fs_sink(&first));
    producer.register(fs_sink(&second));
    producer
        .produce(r#"{"type":"number"}"#, "v1/metrics.json")
        .await
        .expect("fan-out should succeed");

    for dir in [&first, &second] {
        let fetched = SchemaConsumer::new(fs_sink(dir))
            .consume("v1/metrics.json")
            .await
            .expect("each sink should hold the document");
        assert_eq!(fetched, r#"{"type":"number"}"#);
    }

    let _ = std::fs::remove_dir_all(&first);
    let _ = std::fs::remove_dir_all(&second);
}

#[tokio::test]
async fn missing_document_keeps_its_storage_identity() {
    let dir = unique_temp_dir("missing");
    let validator = SchemaValidator::new(SchemaConsumer::new(fs_sink(&dir)));

    assert!(matches!(
        validator.validate(r#"{"k":1}"#, "absent.json").await,
        Err(ValidateError::Registry(RegistryError::Sink(
            SinkError::NotFound { .. }
        )))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
