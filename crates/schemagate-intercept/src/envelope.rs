use std::collections::HashMap;

use bytes::Bytes;

/// Well-known metadata key naming the schema a payload validates against.
///
/// Carried as an HTTP header or a message user-property; lookup is
/// case-insensitive, matching HTTP header semantics.
pub const SCHEMA_PATH_KEY: &str = "schemaPath";

/// Transport-neutral view of a request, response or message.
///
/// The payload is a [`Bytes`] buffer, so cloning an envelope is a refcount
/// bump: guards can inspect a clone while the original buffer reaches the
/// transport unread.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub payload: Bytes,
    pub metadata: HashMap<String, String>,
}

impl Envelope {
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry, builder-style.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Name the schema this envelope's payload validates against.
    pub fn with_schema_path(self, path: impl Into<String>) -> Self {
        self.with_metadata(SCHEMA_PATH_KEY, path)
    }

    /// Case-insensitive metadata lookup.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.metadata.get(key) {
            return Some(value.as_str());
        }
        self.metadata
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// The schema path named in this envelope's metadata, if any.
    pub fn schema_path(&self) -> Option<&str> {
        self.metadata_value(SCHEMA_PATH_KEY)
    }
}
