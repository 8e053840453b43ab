//! Error payloads returned by the proxy, and the crate's own errors

pub mod codes;
pub mod response;

pub use codes::ErrorType;
pub use response::ErrorResponse;

/// Failure to parse an error response from JSON.
///
/// This is serde_json's own error, handed back to the caller untouched.
pub type MalformedInput = serde_json::Error;

/// Failure to parse one of the crate's enumerations from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown wire format: {0}")]
    UnknownWireFormat(String),

    #[error("unknown OAuth error type: {0}")]
    UnknownErrorType(String),
}
