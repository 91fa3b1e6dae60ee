//! Domain types and use-cases.
//!
//! Purpose: keep pet behaviour and failure semantics independent of HTTP.
//! The inbound adapter depends on this module, never the reverse.

pub mod error;
pub mod health;
pub mod pet;
pub mod pets;

pub use self::error::{Error, ErrorKind};
pub use self::pet::{Pet, PetInput, PetParams};
