//! Schema enforcement around transport operations.
//!
//! One enforcement pipeline, applied in the direction the operation calls
//! for: mutating HTTP verbs and bus sends validate the outgoing payload
//! before the transport call is issued (fail closed), while HTTP GET and bus
//! receives validate the received payload after the transport call completed
//! (fail open, since the receipt is not rolled back). Verbs outside those two
//! groups are refused without touching transport or validator.
//!
//! Transport-level failures are not reinterpreted here; they surface
//! unchanged alongside the validation taxonomy.

pub mod bus;
pub mod direction;
pub mod envelope;
pub mod error;
pub mod http;
pub mod pipeline;

pub use bus::{BusGuard, BusTransport};
pub use direction::{classify, Direction};
pub use envelope::{Envelope, SCHEMA_PATH_KEY};
pub use error::{BoxError, InterceptError, Result};
pub use http::{HttpGuard, HttpResponse, HttpTransport, ReqwestTransport};
pub use pipeline::enforce;

pub use reqwest::Method;
