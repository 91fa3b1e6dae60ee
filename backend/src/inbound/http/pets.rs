//! Pets API handlers.
//!
//! ```text
//! GET /pets:name?name=bob
//! PUT /pets:name?name=bob {"name":"bob","price":150,"breed":"bengal"}
//! ```
//!
//! The route is the literal path `/pets:name`; the pet name travels in the
//! `name` query parameter.

use actix_web::web;

use crate::domain::{Pet, PetInput, PetParams, pets};
use crate::inbound::http::error::{ApiError, ErrorClassifier, Outcome};

/// Literal path shared by the pet routes.
pub const PETS_PATH: &str = "/pets:name";

/// Get a pet by name.
#[utoipa::path(
    get,
    path = "/pets:name",
    params(
        ("name" = String, Query, description = "Name of the pet to fetch")
    ),
    responses(
        (status = 200, description = "The requested pet", body = Pet),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Pet Not Found", body = ApiError),
        (status = 500, description = "Server Error", body = ApiError)
    ),
    tags = ["endpoints"],
    operation_id = "getPet"
)]
pub async fn get_pet(
    classifier: web::Data<dyn ErrorClassifier>,
    params: web::Query<PetParams>,
) -> Outcome<Pet> {
    Outcome::new(pets::get_pet(&params), classifier.into_inner())
}

/// Update a pet.
///
/// The pet is not stored; a successful update echoes the request body.
#[utoipa::path(
    put,
    path = "/pets:name",
    params(
        ("name" = String, Query, description = "Name of the pet to update")
    ),
    request_body = Pet,
    responses(
        (status = 200, description = "The updated pet", body = Pet),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Pet Not Found", body = ApiError),
        (status = 500, description = "Server Error", body = ApiError)
    ),
    tags = ["endpoints"],
    operation_id = "updatePet"
)]
pub async fn update_pet(
    classifier: web::Data<dyn ErrorClassifier>,
    params: web::Query<PetParams>,
    payload: web::Json<Pet>,
) -> Outcome<Pet> {
    let input = PetInput::new(params.into_inner(), payload.into_inner());
    Outcome::new(pets::update_pet(input), classifier.into_inner())
}
