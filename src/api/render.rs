use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use tracing::{debug, error};

use crate::config::RenderConfig;
use crate::errors::ErrorResponse;
use crate::wire::{xml, WireFormat};

/// Writes error responses in the format a client asked for.
///
/// As an extractor it reads the request's `Accept` header and falls back to
/// the [`RenderConfig`] held in router state. It never rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorRenderer {
    format: WireFormat,
    xml_declaration: bool,
}

impl ErrorRenderer {
    pub fn new(format: WireFormat, xml_declaration: bool) -> Self {
        Self {
            format,
            xml_declaration,
        }
    }

    /// Pick the format for a request from its headers
    pub fn negotiate(headers: &HeaderMap, config: &RenderConfig) -> Self {
        let accept = headers
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join(",");

        let accept = (!accept.is_empty()).then_some(accept.as_str());

        Self::new(
            WireFormat::negotiate(accept, config.default_format),
            config.xml_declaration,
        )
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn render(&self, response: ErrorResponse) -> Response {
        let status = StatusCode::from_u16(response.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self.format {
            WireFormat::Json => match response.to_json() {
                Ok(body) => body,
                Err(e) => {
                    error!("Failed to encode error response: {}", e);
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            },
            WireFormat::Xml if self.xml_declaration => xml::to_document(&response),
            WireFormat::Xml => xml::to_element(&response),
        };

        debug!(
            status = %status.as_u16(),
            format = %self.format,
            error_type = response.error_type().unwrap_or("-"),
            "Rendering error response"
        );

        (
            status,
            [(header::CONTENT_TYPE, self.format.content_type())],
            body,
        )
            .into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ErrorRenderer
where
    RenderConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = RenderConfig::from_ref(state);
        Ok(Self::negotiate(&parts.headers, &config))
    }
}
