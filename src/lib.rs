//! Error payloads for an OAuth proxy, encoded as JSON or XML
pub mod api;
pub mod config;
pub mod errors;
pub mod wire;

pub use api::ErrorRenderer;
pub use config::{Config, RenderConfig};
pub use errors::{ErrorResponse, ErrorType, MalformedInput, ParseError};
pub use wire::WireFormat;
