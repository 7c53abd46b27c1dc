use schemagate_registry::RegistryError;
use serde::Serialize;

/// Errors that can occur during payload validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The payload was blank.
    #[error("payload must not be blank")]
    EmptyPayload,

    /// The schema path was blank.
    #[error("schema path must not be blank")]
    EmptyPath,

    /// The consumer returned empty schema text.
    #[error("no schema at {path} in sink {sink}")]
    SchemaNotFound { path: String, sink: String },

    /// The schema text failed to parse or compile.
    #[error("schema at {path} in sink {sink} is malformed: {reason}")]
    SchemaMalformed {
        path: String,
        sink: String,
        reason: String,
    },

    /// The payload is not valid JSON at all.
    #[error("payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The payload parsed but does not conform to the schema; carries every
    /// violation the engine produced.
    #[error("payload failed validation against {path} in sink {sink}: {} violation(s)", violations.len())]
    ValidationFailed {
        path: String,
        sink: String,
        violations: Vec<Violation>,
    },

    /// A consumer or sink failure passed through with its original cause.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// One structural violation reported by the schema engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Schema keyword that failed, e.g. `type` or `required`.
    pub keyword: String,
    /// JSON pointer into the payload.
    pub instance_path: String,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, ValidateError>;
