use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// Wire representation of an error response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Json,
    Xml,
}

impl WireFormat {
    /// Content type sent with this representation
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// The format that is not this one
    pub fn other(&self) -> WireFormat {
        match self {
            Self::Json => Self::Xml,
            Self::Xml => Self::Json,
        }
    }

    /// Choose a format from an `Accept` header value.
    ///
    /// The acceptable entry with the highest quality wins. Exact media types
    /// beat wildcards at equal quality, and earlier entries beat later ones.
    /// A format listed with `q=0` is never chosen, not even through a
    /// wildcard. Wildcards resolve to `default` when it is allowed, otherwise
    /// to the other format. Entries with a malformed `q` are ignored.
    pub fn negotiate(accept: Option<&str>, default: WireFormat) -> WireFormat {
        let Some(accept) = accept else {
            return default;
        };

        let entries: Vec<(Option<WireFormat>, f32)> =
            accept.split(',').filter_map(parse_accept_entry).collect();

        let excluded = |format: WireFormat| {
            entries
                .iter()
                .any(|(exact, q)| *exact == Some(format) && *q == 0.0)
        };
        let allowed = [default, default.other()]
            .into_iter()
            .find(|format| !excluded(*format));

        let mut best: Option<(WireFormat, f32, bool)> = None;

        for (exact, quality) in entries.iter().copied() {
            if quality == 0.0 {
                continue;
            }

            let (format, is_exact) = match exact {
                Some(format) => (format, true),
                None => match allowed {
                    Some(format) => (format, false),
                    None => continue,
                },
            };

            let better = match best {
                None => true,
                Some((_, best_q, best_exact)) => {
                    quality > best_q || (quality == best_q && is_exact && !best_exact)
                }
            };
            if better {
                best = Some((format, quality, is_exact));
            }
        }

        best.map(|(format, _, _)| format)
            .or(allowed)
            .unwrap_or(default)
    }
}

/// Parse one `Accept` entry into its format (`None` for a wildcard) and quality.
///
/// Unrelated media types and entries whose `q` is not a number in `0..=1`
/// yield `None`.
fn parse_accept_entry(entry: &str) -> Option<(Option<WireFormat>, f32)> {
    let mut parts = entry.split(';');
    let media = parts.next().unwrap_or("").trim().to_ascii_lowercase();

    let format = match media.as_str() {
        "application/json" | "text/json" => Some(WireFormat::Json),
        "application/xml" | "text/xml" => Some(WireFormat::Xml),
        "*/*" | "application/*" => None,
        _ => return None,
    };

    let quality = match parts.find_map(|param| param.trim().strip_prefix("q=")) {
        Some(q) => q
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|q| (0.0..=1.0).contains(q))?,
        None => 1.0,
    };

    Some((format, quality))
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(ParseError::UnknownWireFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("json".parse::<WireFormat>().unwrap(), WireFormat::Json);
        assert_eq!(" XML ".parse::<WireFormat>().unwrap(), WireFormat::Xml);
        assert!(matches!(
            "yaml".parse::<WireFormat>(),
            Err(ParseError::UnknownWireFormat(s)) if s == "yaml"
        ));
    }

    #[test]
    fn test_negotiate_missing_header_uses_default() {
        assert_eq!(WireFormat::negotiate(None, WireFormat::Json), WireFormat::Json);
        assert_eq!(WireFormat::negotiate(None, WireFormat::Xml), WireFormat::Xml);
        assert_eq!(WireFormat::negotiate(Some(""), WireFormat::Xml), WireFormat::Xml);
    }

    #[test]
    fn test_negotiate_exact_types() {
        let default = WireFormat::Json;
        assert_eq!(WireFormat::negotiate(Some("application/xml"), default), WireFormat::Xml);
        assert_eq!(WireFormat::negotiate(Some("text/xml"), default), WireFormat::Xml);
        assert_eq!(
            WireFormat::negotiate(Some("application/json"), WireFormat::Xml),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("Application/XML; charset=utf-8"), default),
            WireFormat::Xml
        );
    }

    #[test]
    fn test_negotiate_quality() {
        assert_eq!(
            WireFormat::negotiate(
                Some("application/json;q=0.5, application/xml;q=0.9"),
                WireFormat::Json
            ),
            WireFormat::Xml
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/xml;q=0, */*"), WireFormat::Xml),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/xml;q=0"), WireFormat::Json),
            WireFormat::Json
        );
    }

    #[test]
    fn test_negotiate_refused_format_is_never_chosen() {
        assert_eq!(
            WireFormat::negotiate(Some("*/*, application/xml;q=0"), WireFormat::Xml),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/xml;q=0"), WireFormat::Xml),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/json;q=0, */*;q=0.5"), WireFormat::Json),
            WireFormat::Xml
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/json;q=0, */*"), WireFormat::Xml),
            WireFormat::Xml
        );
    }

    #[test]
    fn test_negotiate_ignores_malformed_quality() {
        assert_eq!(
            WireFormat::negotiate(Some("application/xml;q=NaN, application/json"), WireFormat::Json),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/xml;q=5, application/json"), WireFormat::Json),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/xml;q=-1, application/json;q=0.1"), WireFormat::Xml),
            WireFormat::Json
        );
        assert_eq!(
            WireFormat::negotiate(Some("application/json;q=inf"), WireFormat::Xml),
            WireFormat::Xml
        );
    }

    #[test]
    fn test_other() {
        assert_eq!(WireFormat::Json.other(), WireFormat::Xml);
        assert_eq!(WireFormat::Xml.other(), WireFormat::Json);
    }

    #[test]
    fn test_negotiate_exact_beats_wildcard() {
        assert_eq!(
            WireFormat::negotiate(Some("*/*, application/xml"), WireFormat::Json),
            WireFormat::Xml
        );
        assert_eq!(
            WireFormat::negotiate(Some("text/html, */*;q=0.8"), WireFormat::Xml),
            WireFormat::Xml
        );
    }

    #[test]
    fn test_negotiate_earlier_entry_wins_tie() {
        assert_eq!(
            WireFormat::negotiate(Some("application/xml, application/json"), WireFormat::Json),
            WireFormat::Xml
        );
        assert_eq!(
            WireFormat::negotiate(Some("text/html, image/png"), WireFormat::Json),
            WireFormat::Json
        );
    }

    #[test]
    fn test_content_type() {
        assert_eq!(WireFormat::Json.content_type(), "application/json");
        assert_eq!(WireFormat::Xml.content_type(), "application/xml");
    }
}
