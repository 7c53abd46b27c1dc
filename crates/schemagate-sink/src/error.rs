/// Errors that can occur in sink storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The base location was blank at construction.
    #[error("base location must not be blank")]
    EmptyBaseLocation,

    /// The container name was blank at construction.
    #[error("container name must not be blank")]
    EmptyContainer,

    /// The base location or resolved path is not a usable address.
    #[error("invalid location {location}: {reason}")]
    InvalidLocation { location: String, reason: String },

    /// No schema document exists at the resolved path.
    #[error("schema not found: {path}")]
    NotFound { path: String },

    /// The container does not exist in the object store.
    #[error("container not found: {container}")]
    ContainerNotFound { container: String },

    /// The container exists but holds no object under the resolved key.
    #[error("object {key} not found in container {container}")]
    ObjectNotFound { container: String, key: String },

    /// The remote endpoint answered with a non-success status.
    #[error("transport failure for {url}: HTTP {status}")]
    TransportStatus { url: String, status: u16 },

    /// The transport call itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An I/O error occurred against the backing store.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A backend client reported a failure of its own.
    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SinkError>;
