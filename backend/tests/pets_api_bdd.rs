//! Behaviour tests for the pet service endpoints.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![expect(
    non_snake_case,
    reason = "rstest-bdd step guards use double-underscore names"
)]

use std::sync::{Arc, Mutex};

use actix_web::test::{self as actix_test, TestRequest};
use backend::domain::Pet;
use backend::inbound::http::{ApiError, StatusTable, build_router};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct PetWorld {
    ready: bool,
    status: Option<u16>,
    body: Option<Vec<u8>>,
}

#[fixture]
fn world() -> Mutex<PetWorld> {
    Mutex::new(PetWorld::default())
}

fn perform(world: &Mutex<PetWorld>, request: TestRequest) {
    assert!(world.lock().expect("world lock").ready, "service not started");
    let (status, body) = actix_rt::System::new().block_on(async move {
        let router = build_router(Arc::new(StatusTable)).expect("router assembles");
        let app = actix_test::init_service(router.into_app()).await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status().as_u16();
        (status, actix_test::read_body(response).await.to_vec())
    });
    let mut world = world.lock().expect("world lock");
    world.status = Some(status);
    world.body = Some(body);
}

fn pets_uri(name: &str) -> String {
    format!("/pets:name?name={name}")
}

fn last_body(world: &Mutex<PetWorld>) -> Vec<u8> {
    world
        .lock()
        .expect("world lock")
        .body
        .clone()
        .expect("response recorded")
}

#[given("a running pet service")]
fn a_running_pet_service(world: &Mutex<PetWorld>) {
    world.lock().expect("world lock").ready = true;
}

#[when("the client checks health")]
fn the_client_checks_health(world: &Mutex<PetWorld>) {
    perform(world, TestRequest::get().uri("/healthcheck"));
}

#[when("the client fetches the pet named {name}")]
fn the_client_fetches_the_pet_named(world: &Mutex<PetWorld>, name: String) {
    perform(world, TestRequest::get().uri(&pets_uri(&name)));
}

#[when("the client updates the pet named {name} to a {breed} priced {price}")]
fn the_client_updates_the_pet(
    world: &Mutex<PetWorld>,
    name: String,
    breed: String,
    price: u32,
) {
    let pet = Pet::new(name.as_str(), price, breed.as_str());
    perform(world, TestRequest::put().uri(&pets_uri(&name)).set_json(pet));
}

#[when("the client deletes the pet named {name}")]
fn the_client_deletes_the_pet_named(world: &Mutex<PetWorld>, name: String) {
    perform(world, TestRequest::delete().uri(&pets_uri(&name)));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &Mutex<PetWorld>, status: u16) {
    assert_eq!(world.lock().expect("world lock").status, Some(status));
}

#[then("the response body is empty")]
fn the_response_body_is_empty(world: &Mutex<PetWorld>) {
    assert!(last_body(world).is_empty());
}

#[then("the response describes {name} the {breed} priced {price}")]
fn the_response_describes(world: &Mutex<PetWorld>, name: String, breed: String, price: u32) {
    let pet: Pet = serde_json::from_slice(&last_body(world)).expect("pet body");
    assert_eq!(pet, Pet::new(name.as_str(), price, breed.as_str()));
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &Mutex<PetWorld>, message: String) {
    let error: ApiError = serde_json::from_slice(&last_body(world)).expect("error body");
    assert_eq!(error.message, message);
}

#[scenario(path = "tests/features/pets_api.feature", name = "Healthcheck succeeds")]
fn healthcheck_succeeds(world: Mutex<PetWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/pets_api.feature", name = "Fetching the known pet")]
fn fetching_the_known_pet(world: Mutex<PetWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/pets_api.feature", name = "Fetching an unknown pet")]
fn fetching_an_unknown_pet(world: Mutex<PetWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/pets_api.feature", name = "Updating the known pet")]
fn updating_the_known_pet(world: Mutex<PetWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/pets_api.feature", name = "Updating an unknown pet")]
fn updating_an_unknown_pet(world: Mutex<PetWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/pets_api.feature", name = "Unsupported method")]
fn unsupported_method(world: Mutex<PetWorld>) {
    drop(world);
}
