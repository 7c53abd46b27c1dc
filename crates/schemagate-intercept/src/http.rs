use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use schemagate_validate::SchemaValidator;

use crate::direction::{classify, Direction};
use crate::envelope::Envelope;
use crate::error::{BoxError, InterceptError, Result};
use crate::pipeline::enforce;

/// Status, headers and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Contract the underlying HTTP client must satisfy.
///
/// One call per exchange: the guard owns direction classification and
/// validation ordering, the transport only moves bytes.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        envelope: &Envelope,
    ) -> std::result::Result<HttpResponse, BoxError>;
}

/// Production transport backed by [`reqwest::Client`].
#[derive(Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        envelope: &Envelope,
    ) -> std::result::Result<HttpResponse, BoxError> {
        let mut request = self.client.request(method, url);
        for (key, value) in &envelope.metadata {
            request = request.header(key, value);
        }
        if !envelope.payload.is_empty() {
            request = request.body(envelope.payload.clone());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }
        let body = response.bytes().await?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Wraps an HTTP transport with direction-appropriate schema enforcement.
///
/// POST/PUT/PATCH validate the request envelope before the call goes out;
/// a validation failure means the transport is never invoked. GET lets the
/// call complete, then validates the response body against the schema named
/// by the exchange. Other verbs are refused up front.
pub struct HttpGuard<T: HttpTransport = ReqwestTransport> {
    transport: T,
    validator: SchemaValidator,
}

impl HttpGuard<ReqwestTransport> {
    pub fn new(validator: SchemaValidator) -> Self {
        Self::with_transport(ReqwestTransport::new(), validator)
    }
}

impl<T: HttpTransport> HttpGuard<T> {
    pub fn with_transport(transport: T, validator: SchemaValidator) -> Self {
        Self {
            transport,
            validator,
        }
    }

    /// Issue `method` against `url` with schema enforcement.
    pub async fn send(&self, method: Method, url: &str, envelope: &Envelope) -> Result<HttpResponse> {
        let direction = classify(&method)
            .ok_or_else(|| InterceptError::UnsupportedMethod(method.to_string()))?;

        match direction {
            Direction::Pre => {
                enforce(&self.validator, envelope).await?;
                tracing::debug!(url, "outbound payload conforms; dispatching");
                let response = self
                    .transport
                    .execute(method, url, envelope)
                    .await
                    .map_err(InterceptError::Transport)?;
                self.check_status(url, response)
            }
            Direction::Post => {
                let response = self
                    .transport
                    .execute(method, url, envelope)
                    .await
                    .map_err(InterceptError::Transport)?;
                let response = self.check_status(url, response)?;
                let received = received_envelope(envelope, &response);
                enforce(&self.validator, &received).await?;
                Ok(response)
            }
        }
    }

    /// GET `url` and validate the response body against `schema_path`.
    pub async fn get(&self, url: &str, schema_path: &str) -> Result<HttpResponse> {
        self.send(Method::GET, url, &Envelope::default().with_schema_path(schema_path))
            .await
    }

    pub async fn post(&self, url: &str, envelope: &Envelope) -> Result<HttpResponse> {
        self.send(Method::POST, url, envelope).await
    }

    pub async fn put(&self, url: &str, envelope: &Envelope) -> Result<HttpResponse> {
        self.send(Method::PUT, url, envelope).await
    }

    pub async fn patch(&self, url: &str, envelope: &Envelope) -> Result<HttpResponse> {
        self.send(Method::PATCH, url, envelope).await
    }

    fn check_status(&self, url: &str, response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(InterceptError::TransportStatus {
                url: url.to_string(),
                status: response.status,
            })
        }
    }
}

/// The received side of an exchange: response body, with the request
/// metadata merged under the response headers so either side may name the
/// schema.
fn received_envelope(request: &Envelope, response: &HttpResponse) -> Envelope {
    let mut metadata = request.metadata.clone();
    for (key, value) in &response.headers {
        metadata.insert(key.clone(), value.clone());
    }
    Envelope {
        payload: response.body.clone(),
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use schemagate_registry::SchemaConsumer;
    use schemagate_sink::{MemorySink, SchemaSink};
    use schemagate_validate::ValidateError;

    use super::*;

    const HELLO_SCHEMA: &str =
        r#"{"type":"object","properties":{"hello":{"type":"string"}},"required":["hello"]}"#;

    struct RecordingTransport {
        calls: AtomicUsize,
        body: &'static str,
        status: u16,
    }

    impl RecordingTransport {
        fn respond_with(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                body,
                status,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpTransport for Arc<RecordingTransport> {
        async fn execute(
            &self,
            _method: Method,
            _url: &str,
            _envelope: &Envelope,
        ) -> std::result::Result<HttpResponse, BoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse {
                status: self.status,
                headers: HashMap::new(),
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    async fn guard_with(
        transport: Arc<RecordingTransport>,
    ) -> HttpGuard<Arc<RecordingTransport>> {
        let sink = Arc::new(MemorySink::new());
        sink.put(HELLO_SCHEMA, "default.json")
            .await
            .expect("put should succeed");
        HttpGuard::with_transport(transport, SchemaValidator::new(SchemaConsumer::new(sink)))
    }

    #[tokio::test]
    async fn invalid_post_never_reaches_the_transport() {
        let transport = RecordingTransport::respond_with(200, "");
        let guard = guard_with(transport.clone()).await;

        let envelope = Envelope::new(r#"{"hello":42}"#).with_schema_path("default.json");
        let err = guard
            .post("https://api.example.com/things", &envelope)
            .await
            .expect_err("violating payload should fail closed");

        assert!(matches!(
            err,
            InterceptError::Validation(ValidateError::ValidationFailed { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn conforming_post_is_sent_once() {
        let transport = RecordingTransport::respond_with(200, "");
        let guard = guard_with(transport.clone()).await;

        let envelope = Envelope::new(r#"{"hello":"world"}"#).with_schema_path("default.json");
        let response = guard
            .post("https://api.example.com/things", &envelope)
            .await
            .expect("conforming payload should send");

        assert_eq!(response.status, 200);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_get_body_fails_after_the_transport_call() {
        let transport = RecordingTransport::respond_with(200, r#"{"hello":42}"#);
        let guard = guard_with(transport.clone()).await;

        let err = guard
            .get("https://api.example.com/things/1", "default.json")
            .await
            .expect_err("violating response body should fail");

        assert!(matches!(
            err,
            InterceptError::Validation(ValidateError::ValidationFailed { .. })
        ));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn conforming_get_body_passes() {
        let transport = RecordingTransport::respond_with(200, r#"{"hello":"world"}"#);
        let guard = guard_with(transport.clone()).await;

        let response = guard
            .get("https://api.example.com/things/1", "default.json")
            .await
            .expect("conforming response body should pass");
        assert_eq!(response.body.as_ref(), br#"{"hello":"world"}"#);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn unsupported_verb_touches_neither_transport_nor_validator() {
        let transport = RecordingTransport::respond_with(200, "");
        let guard = guard_with(transport.clone()).await;

        let envelope = Envelope::new("{}").with_schema_path("default.json");
        let err = guard
            .send(Method::DELETE, "https://api.example.com/things/1", &envelope)
            .await
            .expect_err("DELETE should be refused");

        assert!(matches!(err, InterceptError::UnsupportedMethod(method) if method == "DELETE"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn non_success_get_status_preempts_validation() {
        let transport = RecordingTransport::respond_with(502, r#"{"hello":42}"#);
        let guard = guard_with(transport.clone()).await;

        let err = guard
            .get("https://api.example.com/things/1", "default.json")
            .await
            .expect_err("bad gateway should surface as transport failure");

        assert!(matches!(
            err,
            InterceptError::TransportStatus { status: 502, .. }
        ));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn post_without_schema_metadata_fails_closed() {
        let transport = RecordingTransport::respond_with(200, "");
        let guard = guard_with(transport.clone()).await;

        let envelope = Envelope::new(r#"{"hello":"world"}"#);
        let err = guard
            .post("https://api.example.com/things", &envelope)
            .await
            .expect_err("missing metadata should fail closed");

        assert!(matches!(err, InterceptError::MetadataMissing { .. }));
        assert_eq!(transport.calls(), 0);
    }
}
