use anyhow::{Context, Result};
use std::env;
use tracing::info;

use crate::wire::WireFormat;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderConfig,
}

/// How error responses are written to HTTP clients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Used when the client's `Accept` header does not pick a format
    pub default_format: WireFormat,
    /// Prefix XML bodies with an `<?xml ...?>` declaration
    pub xml_declaration: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            render: RenderConfig {
                default_format: lookup("ERROR_RESPONSE_FORMAT")
                    .unwrap_or_else(|| "json".to_string())
                    .parse()
                    .context("ERROR_RESPONSE_FORMAT must be `json` or `xml`")?,
                xml_declaration: lookup("ERROR_RESPONSE_XML_DECLARATION")
                    .unwrap_or_else(|| "false".to_string())
                    .parse()
                    .context("ERROR_RESPONSE_XML_DECLARATION must be `true` or `false`")?,
            },
        };

        info!(
            default_format = %config.render.default_format,
            xml_declaration = config.render.xml_declaration,
            "Error response configuration loaded"
        );

        Ok(config)
    }
}
