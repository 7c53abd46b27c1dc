use async_trait::async_trait;
use schemagate_validate::SchemaValidator;

use crate::envelope::Envelope;
use crate::error::{BoxError, InterceptError, Result};
use crate::pipeline::enforce;

/// Contract the underlying message-bus client must satisfy.
///
/// Send and receive move whole envelopes; broker specifics (sessions,
/// topics, acknowledgement) stay behind the implementation.
#[async_trait]
pub trait BusTransport: Send + Sync {
    async fn send(&self, envelope: Envelope) -> std::result::Result<(), BoxError>;

    async fn receive(&self) -> std::result::Result<Envelope, BoxError>;
}

/// Explicit enforcement pipeline around a message-bus client.
///
/// Sends validate before the bus is touched and fail closed. Receives
/// validate after the envelope arrived and fail open: the receipt stands,
/// only the outcome is surfaced. In both directions the guard inspects a
/// clone of the envelope: some transports hand out single-read body
/// buffers, and the original must reach the bus (or the caller) unread.
pub struct BusGuard<T: BusTransport> {
    transport: T,
    validator: SchemaValidator,
}

impl<T: BusTransport> BusGuard<T> {
    pub fn new(transport: T, validator: SchemaValidator) -> Self {
        Self {
            transport,
            validator,
        }
    }

    /// Validate `envelope` and hand it to the bus; on any enforcement
    /// failure the bus never sees the message.
    pub async fn send(&self, envelope: Envelope) -> Result<()> {
        let inspected = envelope.clone();
        enforce(&self.validator, &inspected).await?;
        tracing::debug!("outbound message conforms; handing to bus");
        self.transport
            .send(envelope)
            .await
            .map_err(InterceptError::Transport)
    }

    /// Take the next envelope from the bus and validate it before handing
    /// it to the caller.
    pub async fn receive(&self) -> Result<Envelope> {
        let envelope = self
            .transport
            .receive()
            .await
            .map_err(InterceptError::Transport)?;
        let inspected = envelope.clone();
        enforce(&self.validator, &inspected).await?;
        Ok(envelope)
    }
}
