//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: the health check and pet endpoints from the inbound layer
//! - **Schemas**: [`Pet`] and the [`ApiError`] envelope
//! - **Tags**: a single `endpoints` group
//!
//! Router assembly validates the generated document against the route table
//! before serving it at `/openapi.json`. The `openapi-dump` binary prints it
//! for external tooling.

use crate::domain::Pet;
use crate::inbound::http::error::ApiError;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Example API",
        description = "The API definition for the Example API.",
        version = "1.0.0"
    ),
    paths(
        crate::inbound::http::health::healthcheck,
        crate::inbound::http::pets::get_pet,
        crate::inbound::http::pets::update_pet,
    ),
    components(schemas(Pet, ApiError)),
    tags(
        (name = "endpoints", description = "All of the endpoints.")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's metadata and schemas.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_info_matches_service() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Example API");
        assert_eq!(doc.info.version, "1.0.0");
        assert_eq!(
            doc.info.description.as_deref(),
            Some("The API definition for the Example API.")
        );
    }

    #[test]
    fn openapi_pet_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let pet = schemas.get("Pet").expect("Pet schema");

        for field in ["name", "price", "breed"] {
            assert_object_schema_has_field(pet, field);
        }
    }

    #[test]
    fn openapi_error_schema_has_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("ApiError").expect("ApiError schema");

        assert_object_schema_has_field(error, "message");
    }

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, ["/healthcheck", "/pets:name"]);
    }
}
