use async_trait::async_trait;

use crate::error::Result;

/// A pluggable schema storage backend.
///
/// Implementations resolve paths through the sanitization helpers in
/// [`crate::path`], so a fully-qualified address and its bare relative key
/// name the same document. The base location is fixed at construction; to
/// repoint a sink, construct a new one rather than mutating a shared
/// instance.
#[async_trait]
pub trait SchemaSink: Send + Sync {
    /// Fetch the schema document at `path`.
    ///
    /// Fails with a not-found class error when the resolved object does not
    /// exist.
    async fn get(&self, path: &str) -> Result<String>;

    /// Write the schema document at `path`, creating any missing
    /// intermediate structure and overwriting an existing document.
    async fn put(&self, schema: &str, path: &str) -> Result<()>;

    /// The base location this sink was constructed with.
    fn base_location(&self) -> &str;
}
