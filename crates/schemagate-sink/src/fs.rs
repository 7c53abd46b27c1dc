use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{Result, SinkError};
use crate::path::sanitize;
use crate::sink::SchemaSink;

/// Filesystem-backed sink rooted at a base directory.
pub struct FsSink {
    base: PathBuf,
    base_location: String,
}

impl FsSink {
    /// Create a sink rooted at `base_location`, rejecting blank values.
    pub fn new(base_location: impl Into<String>) -> Result<Self> {
        let base_location = base_location.into();
        if base_location.trim().is_empty() {
            return Err(SinkError::EmptyBaseLocation);
        }
        Ok(Self {
            base: PathBuf::from(base_location.trim()),
            base_location,
        })
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(sanitize(path, &self.base_location))
    }
}

#[async_trait]
impl SchemaSink for FsSink {
    async fn get(&self, path: &str) -> Result<String> {
        let file = self.resolve(path);
        match tokio::fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(SinkError::NotFound {
                path: file.display().to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn put(&self, schema: &str, path: &str) -> Result<()> {
        let file = self.resolve(path);
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file, schema).await?;
        tracing::debug!(path = %file.display(), "schema written");
        Ok(())
    }

    fn base_location(&self) -> &str {
        &self.base_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "schemagate-fs-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir
    }

    #[test]
    fn blank_base_is_rejected() {
        assert!(matches!(FsSink::new("  "), Err(SinkError::EmptyBaseLocation)));
        assert!(matches!(FsSink::new(""), Err(SinkError::EmptyBaseLocation)));
    }

    #[tokio::test]
    async fn round_trip_preserves_text() {
        let dir = unique_temp_dir("round-trip");
        let sink = FsSink::new(dir.display().to_string()).expect("sink should build");

        let schema = r#"{"type":"string"}"#;
        sink.put(schema, "default.json").await.expect("put should succeed");
        let fetched = sink.get("default.json").await.expect("get should succeed");
        assert_eq!(fetched, schema);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn nested_path_creates_directories() {
        let dir = unique_temp_dir("nested");
        let sink = FsSink::new(dir.display().to_string()).expect("sink should build");

        sink.put("{}", "v2/orders/default.json")
            .await
            .expect("put should create intermediate directories");
        assert!(dir.join("v2/orders/default.json").is_file());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = unique_temp_dir("missing");
        let sink = FsSink::new(dir.display().to_string()).expect("sink should build");

        assert!(matches!(
            sink.get("absent.json").await,
            Err(SinkError::NotFound { .. })
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn put_overwrites_existing_document() {
        let dir = unique_temp_dir("overwrite");
        let sink = FsSink::new(dir.display().to_string()).expect("sink should build");

        sink.put(r#"{"type":"string"}"#, "default.json")
            .await
            .expect("first put should succeed");
        sink.put(r#"{"type":"number"}"#, "default.json")
            .await
            .expect("second put should overwrite");

        let fetched = sink.get("default.json").await.expect("get should succeed");
        assert_eq!(fetched, r#"{"type":"number"}"#);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
