use axum::response::{IntoResponse, Response};
use std::str::FromStr;
use tracing::debug;

use super::codes::ErrorType;
use super::MalformedInput;
use crate::api::render::ErrorRenderer;
use crate::wire::{self, Field};

/// Error payload returned to OAuth clients.
///
/// Every field is optional; nothing is validated. On the wire the fields are
/// `error_code`, `error_type` and `error_message`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    code: Option<String>,
    error_type: Option<String>,
    message: Option<String>,
}

impl ErrorResponse {
    /// Create a fully populated error response
    pub fn new(
        code: impl Into<String>,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            error_type: Some(error_type.into()),
            message: Some(message.into()),
        }
    }

    /// Create an error response for a well-known OAuth error type.
    ///
    /// The code is the type's HTTP status.
    pub fn from_type(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self::new(
            error_type.status_code().to_string(),
            error_type.as_str(),
            message,
        )
    }

    /// Build an error response from JSON text.
    ///
    /// Missing keys leave the matching field unset. Anything that is not a
    /// JSON object with string (or null) values fails with serde_json's error,
    /// including empty input and a bare `null`.
    pub fn parse_from_json(json: &str) -> Result<Self, MalformedInput> {
        serde_json::from_str(json).map_err(|e| {
            debug!(error = %e, "Rejected malformed error response JSON");
            e
        })
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = Some(code.into());
    }

    pub fn set_error_type(&mut self, error_type: impl Into<String>) {
        self.error_type = Some(error_type.into());
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_code(&mut self) {
        self.code = None;
    }

    pub fn clear_error_type(&mut self) {
        self.error_type = None;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Read a field by its wire identity
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Code => self.code(),
            Field::Type => self.error_type(),
            Field::Message => self.message(),
        }
    }

    pub(crate) fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Code => self.code = Some(value),
            Field::Type => self.error_type = Some(value),
            Field::Message => self.message = Some(value),
        }
    }

    /// Encode as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encode as an `error_response` XML element
    pub fn to_xml(&self) -> String {
        wire::xml::to_element(self)
    }

    /// HTTP status to send this error with.
    ///
    /// A code that is itself a 4xx/5xx status wins, then the status of a
    /// known OAuth error type, then 500.
    pub fn status_code(&self) -> u16 {
        if let Some(status) = self
            .code()
            .and_then(|c| c.trim().parse::<u16>().ok())
            .filter(|s| (400..=599).contains(s))
        {
            return status;
        }

        self.error_type()
            .and_then(|t| t.parse::<ErrorType>().ok())
            .map(|t| t.status_code())
            .unwrap_or(500)
    }
}

impl FromStr for ErrorResponse {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_json(s)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        ErrorRenderer::default().render(self)
    }
}

/// Helper for creating common errors
impl ErrorResponse {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::from_type(ErrorType::InvalidRequest, message)
    }

    pub fn invalid_client(message: impl Into<String>) -> Self {
        Self::from_type(ErrorType::InvalidClient, message)
    }

    pub fn invalid_grant(message: impl Into<String>) -> Self {
        Self::from_type(ErrorType::InvalidGrant, message)
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::from_type(ErrorType::InvalidToken, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::from_type(ErrorType::ServerError, message)
    }

    pub fn temporarily_unavailable(message: impl Into<String>) -> Self {
        Self::from_type(ErrorType::TemporarilyUnavailable, message)
    }
}
