//! Pet use-cases.
//!
//! There is no store behind these functions: exactly one pet, `bob`, is
//! known, and updates are echoed back without being kept. Nothing here holds
//! state, so concurrent requests need no coordination.

use super::{Error, Pet, PetInput, PetParams};

/// The only pet name the service recognises.
pub const KNOWN_PET: &str = "bob";

fn known_pet() -> Pet {
    Pet::new(KNOWN_PET, 100, "bengal")
}

fn require_known(params: &PetParams) -> Result<(), Error> {
    if params.name == KNOWN_PET {
        Ok(())
    } else {
        Err(Error::not_found(format!("Pet {}", params.name)))
    }
}

/// Look up a pet by name.
///
/// Names are compared exactly; `"Bob"` and `" bob"` are unknown.
///
/// # Errors
/// Returns [`ErrorKind::NotFound`](super::ErrorKind::NotFound) for any name
/// other than `"bob"`.
///
/// # Examples
/// ```
/// use backend::domain::{pets, PetParams};
///
/// let pet = pets::get_pet(&PetParams::new("bob")).expect("bob exists");
/// assert_eq!(pet.breed, "bengal");
/// ```
pub fn get_pet(params: &PetParams) -> Result<Pet, Error> {
    require_known(params)?;
    Ok(known_pet())
}

/// Update a pet, returning the supplied values unchanged.
///
/// # Errors
/// Returns [`ErrorKind::NotFound`](super::ErrorKind::NotFound) when the
/// lookup key is not `"bob"`.
pub fn update_pet(input: PetInput) -> Result<Pet, Error> {
    require_known(&input.pet_params)?;
    Ok(input.pet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use rstest::{fixture, rstest};

    #[fixture]
    fn replacement() -> Pet {
        Pet::new("bob", 150, "bengal")
    }

    #[rstest]
    fn get_pet_returns_bob() {
        let pet = get_pet(&PetParams::new("bob")).expect("bob exists");
        assert_eq!(pet, Pet::new("bob", 100, "bengal"));
    }

    #[rstest]
    #[case("whiskers")]
    #[case("Bob")]
    #[case(" bob")]
    #[case("bob ")]
    #[case("")]
    fn get_pet_rejects_other_names(#[case] name: &str) {
        let err = get_pet(&PetParams::new(name)).expect_err("unknown pet");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), format!("Pet {name} not found"));
    }

    #[rstest]
    fn update_pet_echoes_input(replacement: Pet) {
        let input = PetInput::new(PetParams::new("bob"), replacement.clone());
        let first = update_pet(input.clone()).expect("bob exists");
        let second = update_pet(input).expect("bob exists");
        assert_eq!(first, replacement);
        assert_eq!(second, first);
    }

    #[rstest]
    fn update_pet_does_not_require_matching_body_name() {
        let renamed = Pet::new("robert", 1, "siamese");
        let input = PetInput::new(PetParams::new("bob"), renamed.clone());
        assert_eq!(update_pet(input).expect("bob exists"), renamed);
    }

    #[rstest]
    #[case("whiskers")]
    #[case("BOB")]
    fn update_pet_rejects_other_names(#[case] name: &str, replacement: Pet) {
        let input = PetInput::new(PetParams::new(name), replacement);
        let err = update_pet(input).expect_err("unknown pet");
        assert!(err.is(ErrorKind::NotFound));
        assert!(err.message().contains(name));
    }
}
