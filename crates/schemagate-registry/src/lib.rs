//! Schema document fan-out and retrieval.
//!
//! The producer writes one schema document to every registered sink,
//! absorbing individual write failures and re-raising them as a single
//! aggregate. The consumer reads a document back from exactly one sink and
//! passes storage failures through unchanged.

pub mod consumer;
pub mod error;
pub mod producer;

pub use consumer::SchemaConsumer;
pub use error::{RegistryError, Result, SinkFailure};
pub use producer::SchemaProducer;
