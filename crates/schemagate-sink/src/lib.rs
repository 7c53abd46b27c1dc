//! Pluggable schema storage backends behind one get/put contract.
//!
//! A sink stores and retrieves JSON schema documents by relative path under
//! a base location fixed at construction. Callers may address a document by
//! its bare key (`"v1/default.json"`) or by a fully-qualified URL that embeds
//! the sink's own base location; both resolve to the same object.
//!
//! This is the lowest layer of schemagate. Producers, consumers and
//! validators all speak to storage through the [`SchemaSink`] trait.

pub mod error;
pub mod fs;
pub mod http;
pub mod memory;
pub mod object;
pub mod path;
pub mod sink;

pub use error::{Result, SinkError};
pub use fs::FsSink;
pub use http::HttpSink;
pub use memory::MemorySink;
pub use object::{ObjectSink, ObjectStoreClient};
pub use sink::SchemaSink;
