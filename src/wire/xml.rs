//! XML encoding of [`ErrorResponse`]
//!
//! The representation is a single empty element whose attributes are the set
//! fields, in wire order.

use super::fields::{ROOT_ELEMENT, WIRE_FIELDS};
use crate::errors::ErrorResponse;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Encode as `<error_response error_code=".." error_type=".." error_message=".."/>`
pub fn to_element(response: &ErrorResponse) -> String {
    let mut out = String::with_capacity(64);
    out.push('<');
    out.push_str(ROOT_ELEMENT);

    for field in WIRE_FIELDS {
        if let Some(value) = response.field(field) {
            out.push(' ');
            out.push_str(field.wire_name());
            out.push_str("=\"");
            escape_attribute(value, &mut out);
            out.push('"');
        }
    }

    out.push_str("/>");
    out
}

/// Encode as a standalone document, declaration included
pub fn to_document(response: &ErrorResponse) -> String {
    let mut out = String::from(XML_DECLARATION);
    out.push_str(&to_element(response));
    out
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Attribute value normalization would turn these into spaces
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            // Not allowed in XML 1.0, not even as character references
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => {
                out.push(char::REPLACEMENT_CHARACTER)
            }
            _ => out.push(c),
        }
    }
}
