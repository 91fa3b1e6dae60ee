//! Pet data models.
//!
//! Plain records with no behaviour. The inbound adapter binds and validates
//! them before any handler sees a value, so handlers may rely on every field
//! being present and well typed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A pet as exchanged with clients.
///
/// # Examples
/// ```
/// use backend::domain::Pet;
///
/// let pet = Pet::new("bob", 100, "bengal");
/// assert_eq!(pet.name, "bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    /// Unique pet name.
    #[schema(example = "bob")]
    pub name: String,
    /// Price in whole currency units.
    #[schema(example = 100)]
    pub price: u32,
    /// Breed description.
    #[schema(example = "bengal")]
    pub breed: String,
}

impl Pet {
    /// Build a pet from its parts.
    pub fn new(name: impl Into<String>, price: u32, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            breed: breed.into(),
        }
    }
}

/// Lookup key for a single pet, bound from the `name` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetParams {
    /// Name of the pet to address.
    pub name: String,
}

impl PetParams {
    /// Build a lookup key.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Update request: the lookup key combined with the replacement pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetInput {
    /// Which pet to update.
    pub pet_params: PetParams,
    /// Replacement values.
    pub pet: Pet,
}

impl PetInput {
    /// Combine a lookup key and a request body.
    pub fn new(pet_params: PetParams, pet: Pet) -> Self {
        Self { pet_params, pet }
    }
}
