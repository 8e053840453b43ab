use utoipa::openapi::{ObjectBuilder, RefOr, Schema, SchemaType};
use utoipa::{OpenApi, ToSchema};

use crate::errors::ErrorResponse;
use crate::wire::fields::{STRUCT_NAME, WIRE_FIELDS};

// Built from the field table rather than derived, so the schema uses the
// same names as the JSON and XML encoders.
impl<'s> ToSchema<'s> for ErrorResponse {
    fn schema() -> (&'s str, RefOr<Schema>) {
        let mut object = ObjectBuilder::new()
            .description(Some("Error payload returned by the OAuth proxy"));

        for field in WIRE_FIELDS {
            object = object.property(
                field.wire_name(),
                ObjectBuilder::new()
                    .schema_type(SchemaType::String)
                    .nullable(true)
                    .description(Some(field.description())),
            );
        }

        (STRUCT_NAME, object.into())
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OAuth Proxy Errors",
        version = "0.1.0",
        description = "Error payloads returned by the OAuth proxy, as JSON objects or `error_response` XML elements.",
    ),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;
