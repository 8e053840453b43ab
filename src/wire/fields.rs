/// Root element name of the XML representation
pub const ROOT_ELEMENT: &str = "error_response";

/// Name used for the struct in serde and OpenAPI
pub const STRUCT_NAME: &str = "ErrorResponse";

/// A field of an error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Type,
    Message,
}

/// Every field in wire order. Both encoders walk this table.
pub const WIRE_FIELDS: [Field; 3] = [Field::Code, Field::Type, Field::Message];

/// Wire names in wire order, for serde's `deserialize_struct`
pub const WIRE_NAMES: &[&str] = &["error_code", "error_type", "error_message"];

impl Field {
    /// Key used in JSON and attribute name used in XML
    pub const fn wire_name(self) -> &'static str {
        WIRE_NAMES[self.index()]
    }

    /// Position in wire order
    pub const fn index(self) -> usize {
        match self {
            Self::Code => 0,
            Self::Type => 1,
            Self::Message => 2,
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        WIRE_FIELDS
            .into_iter()
            .find(|field| field.wire_name() == name)
    }

    /// Human-readable description for schema docs
    pub const fn description(self) -> &'static str {
        match self {
            Self::Code => "Machine-readable error code",
            Self::Type => "Category of the error",
            Self::Message => "Human-readable description of the error",
        }
    }
}
