use async_trait::async_trait;
use url::Url;

use crate::error::{Result, SinkError};
use crate::path::sanitize;
use crate::sink::SchemaSink;

/// Sink speaking plain GET/PUT against an HTTP endpoint.
///
/// Reads and writes address `base/relative`; any non-success status comes
/// back unchanged as [`SinkError::TransportStatus`]. This backend does not
/// reinterpret 404 as a not-found document.
pub struct HttpSink {
    client: reqwest::Client,
    base: Url,
    base_location: String,
}

impl HttpSink {
    /// Create a sink against `base_location` with a default client.
    pub fn new(base_location: impl Into<String>) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_location)
    }

    /// Create a sink using a caller-configured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client, base_location: impl Into<String>) -> Result<Self> {
        let base_location = base_location.into();
        let trimmed = base_location.trim();
        if trimmed.is_empty() {
            return Err(SinkError::EmptyBaseLocation);
        }

        // Url::join treats a base without a trailing slash as a file.
        let mut normalized = trimmed.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base = Url::parse(&normalized).map_err(|err| SinkError::InvalidLocation {
            location: trimmed.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            client,
            base,
            base_location,
        })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        let key = sanitize(path, &self.base_location);
        self.base.join(&key).map_err(|err| SinkError::InvalidLocation {
            location: key,
            reason: err.to_string(),
        })
    }
}

#[async_trait]
impl SchemaSink for HttpSink {
    async fn get(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::TransportStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    async fn put(&self, schema: &str, path: &str) -> Result<()> {
        let url = self.resolve(path)?;
        let response = self
            .client
            .put(url.clone())
            .header("content-type", "application/json")
            .body(schema.to_string())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::TransportStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    fn base_location(&self) -> &str {
        &self.base_location
    }
}
