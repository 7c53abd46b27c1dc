use std::fmt;

use schemagate_sink::SinkError;

/// Errors that can occur while producing or consuming schema documents.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The schema text was blank.
    #[error("schema text must not be blank")]
    EmptySchema,

    /// The schema path was blank.
    #[error("schema path must not be blank")]
    EmptyPath,

    /// The producer has no sinks to write to.
    #[error("no sinks registered")]
    NoSinks,

    /// Type-driven schema generation failed before any sink was touched.
    #[error("schema generation failed: {0}")]
    Generate(String),

    /// One or more sink writes failed; every failure is carried, not just
    /// the first.
    #[error("{} of {attempted} sink writes failed", failures.len())]
    Aggregate {
        attempted: usize,
        failures: Vec<SinkFailure>,
    },

    /// A sink failure passed through unchanged by the consumer.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// One failed write, tagged with the sink it happened on.
#[derive(Debug)]
pub struct SinkFailure {
    /// Base location of the failing sink.
    pub sink: String,
    pub error: SinkError,
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sink, self.error)
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
