//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod pets;
pub mod router;

pub use error::{ApiError, ErrorClassifier, StatusTable};
pub use router::{ApiRouter, AssemblyError, RouterBuilder, build_router};
