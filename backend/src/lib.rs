//! Pet service library modules.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by the router and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
