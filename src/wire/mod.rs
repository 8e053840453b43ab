//! Wire representations of error responses

pub mod fields;
pub mod format;
pub mod json;
pub mod xml;

pub use fields::{Field, ROOT_ELEMENT, WIRE_FIELDS};
pub use format::WireFormat;
