use std::fmt;
use std::io;

use schemagate_registry::RegistryError;
use schemagate_sink::SinkError;
use schemagate_validate::ValidateError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound => FAILURE,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn sink_error(context: &str, err: SinkError) -> CliError {
    let code = match &err {
        SinkError::EmptyBaseLocation | SinkError::EmptyContainer | SinkError::InvalidLocation { .. } => USAGE,
        SinkError::NotFound { .. }
        | SinkError::ContainerNotFound { .. }
        | SinkError::ObjectNotFound { .. } => FAILURE,
        SinkError::TransportStatus { .. } | SinkError::Transport(_) => TRANSPORT_ERROR,
        SinkError::Io(source) => return io_error(context, annotate(source)),
        SinkError::Store(_) => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn registry_error(context: &str, err: RegistryError) -> CliError {
    match err {
        RegistryError::EmptySchema | RegistryError::EmptyPath | RegistryError::NoSinks => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        RegistryError::Generate(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        RegistryError::Aggregate {
            attempted,
            failures,
        } => {
            let detail: Vec<String> = failures.iter().map(ToString::to_string).collect();
            CliError::new(
                FAILURE,
                format!(
                    "{context}: {} of {attempted} sink writes failed ({})",
                    failures.len(),
                    detail.join("; ")
                ),
            )
        }
        RegistryError::Sink(err) => sink_error(context, err),
    }
}

pub fn validate_error(context: &str, err: ValidateError) -> CliError {
    match err {
        ValidateError::EmptyPayload | ValidateError::EmptyPath => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        ValidateError::SchemaNotFound { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
        ValidateError::SchemaMalformed { .. }
        | ValidateError::InvalidPayload(_)
        | ValidateError::ValidationFailed { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        ValidateError::Registry(err) => registry_error(context, err),
    }
}

fn annotate(source: &io::Error) -> io::Error {
    io::Error::new(source.kind(), source.to_string())
}
