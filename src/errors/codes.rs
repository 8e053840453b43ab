use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// OAuth 2.0 error types (RFC 6749 section 5.2, RFC 6750 section 3.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Request is missing a parameter or is otherwise malformed
    InvalidRequest,

    /// Client authentication failed
    InvalidClient,

    /// Authorization grant or refresh token is invalid or expired
    InvalidGrant,

    /// Client is not allowed to use this grant type
    UnauthorizedClient,

    /// Grant type is not supported by the authorization server
    UnsupportedGrantType,

    /// Requested scope is invalid or exceeds what was granted
    InvalidScope,

    /// Resource owner or server denied the request
    AccessDenied,

    /// Response type is not supported
    UnsupportedResponseType,

    /// Unexpected condition on the server
    ServerError,

    /// Server is overloaded or under maintenance
    TemporarilyUnavailable,

    /// Access token is expired, revoked or malformed
    InvalidToken,

    /// Access token lacks the required scope
    InsufficientScope,
}

const ALL: [ErrorType; 12] = [
    ErrorType::InvalidRequest,
    ErrorType::InvalidClient,
    ErrorType::InvalidGrant,
    ErrorType::UnauthorizedClient,
    ErrorType::UnsupportedGrantType,
    ErrorType::InvalidScope,
    ErrorType::AccessDenied,
    ErrorType::UnsupportedResponseType,
    ErrorType::ServerError,
    ErrorType::TemporarilyUnavailable,
    ErrorType::InvalidToken,
    ErrorType::InsufficientScope,
];

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
            Self::AccessDenied => "access_denied",
            Self::UnsupportedResponseType => "unsupported_response_type",
            Self::ServerError => "server_error",
            Self::TemporarilyUnavailable => "temporarily_unavailable",
            Self::InvalidToken => "invalid_token",
            Self::InsufficientScope => "insufficient_scope",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            Self::InvalidClient => 401,
            Self::InvalidGrant => 400,
            Self::UnauthorizedClient => 400,
            Self::UnsupportedGrantType => 400,
            Self::InvalidScope => 400,
            Self::AccessDenied => 403,
            Self::UnsupportedResponseType => 400,
            Self::ServerError => 500,
            Self::TemporarilyUnavailable => 503,
            Self::InvalidToken => 401,
            Self::InsufficientScope => 403,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownErrorType(s.to_string()))
    }
}
