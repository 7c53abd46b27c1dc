use schemagate_validate::ValidateError;

/// Boxed transport error, kept as the original cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while enforcing schemas around a transport call.
#[derive(Debug, thiserror::Error)]
pub enum InterceptError {
    /// The HTTP method has no enforcement direction.
    #[error("method {0} is not supported for schema enforcement")]
    UnsupportedMethod(String),

    /// The envelope metadata does not name a schema.
    #[error("metadata key {key} is missing")]
    MetadataMissing { key: String },

    /// The envelope carries no payload to validate.
    #[error("payload is empty")]
    EmptyPayload,

    /// The payload bytes are not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    PayloadNotUtf8,

    /// The payload or schema failed validation; the original taxonomy is
    /// preserved.
    #[error(transparent)]
    Validation(#[from] ValidateError),

    /// The remote endpoint answered with a non-success status.
    #[error("transport failure for {url}: HTTP {status}")]
    TransportStatus { url: String, status: u16 },

    /// The transport call itself failed.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, InterceptError>;
