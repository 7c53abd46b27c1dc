//! JSON payload validation against schemas fetched through a consumer.
//!
//! Every call re-fetches the schema document, parses and compiles it, and
//! checks the payload; there is no caching, so repeated calls against an
//! unchanged store always produce the same outcome. Failures are typed so
//! callers can tell a missing schema from a malformed one from a payload
//! that does not conform.

pub mod error;
pub mod validator;

pub use error::{Result, ValidateError, Violation};
pub use validator::SchemaValidator;
