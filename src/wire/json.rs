//! JSON encoding of [`ErrorResponse`]
//!
//! Keys come from [`WIRE_FIELDS`] so the JSON and XML encoders cannot drift apart.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::fields::{Field, STRUCT_NAME, WIRE_FIELDS, WIRE_NAMES};
use crate::errors::ErrorResponse;

impl Serialize for ErrorResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let present = WIRE_FIELDS
            .iter()
            .filter(|field| self.field(**field).is_some())
            .count();

        let mut state = serializer.serialize_struct(STRUCT_NAME, present)?;
        for field in WIRE_FIELDS {
            match self.field(field) {
                Some(value) => state.serialize_field(field.wire_name(), value)?,
                None => state.skip_field(field.wire_name())?,
            }
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for ErrorResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(STRUCT_NAME, WIRE_NAMES, ErrorResponseVisitor)
    }
}

struct ErrorResponseVisitor;

impl<'de> Visitor<'de> for ErrorResponseVisitor {
    type Value = ErrorResponse;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an error response object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut response = ErrorResponse::default();
        let mut seen = [false; WIRE_FIELDS.len()];

        while let Some(key) = map.next_key::<String>()? {
            let Some(field) = Field::from_wire_name(&key) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if seen[field.index()] {
                return Err(de::Error::duplicate_field(field.wire_name()));
            }
            seen[field.index()] = true;

            // An explicit null leaves the field unset
            if let Some(value) = map.next_value::<Option<String>>()? {
                response.set_field(field, value);
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ErrorResponse;
    use serde_json::json;

    #[test]
    fn test_serialize_key_order() {
        let err = ErrorResponse::new("400", "invalid_request", "missing parameter");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"error_code":"400","error_type":"invalid_request","error_message":"missing parameter"}"#
        );
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let mut err = ErrorResponse::default();
        err.set_message("only a message");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, json!({ "error_message": "only a message" }));

        let empty = serde_json::to_string(&ErrorResponse::default()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let err: ErrorResponse = serde_json::from_value(json!({
            "error_code": "401",
            "error_description": "not ours",
            "nested": { "a": [1, 2, 3] }
        }))
        .unwrap();
        assert_eq!(err.code(), Some("401"));
        assert_eq!(err.error_type(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_deserialize_null_leaves_field_unset() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"error_code":null,"error_type":"server_error"}"#).unwrap();
        assert_eq!(err.code(), None);
        assert_eq!(err.error_type(), Some("server_error"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_types() {
        assert!(serde_json::from_str::<ErrorResponse>(r#"{"error_code":500}"#).is_err());
        assert!(serde_json::from_str::<ErrorResponse>(r#"{"error_type":["a"]}"#).is_err());
        assert!(serde_json::from_str::<ErrorResponse>(r#""error""#).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_keys() {
        let result =
            serde_json::from_str::<ErrorResponse>(r#"{"error_code":"1","error_code":"2"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate field `error_code`"));
    }
}
