//! Health endpoint for orchestration and load balancers.
//! Documented in OpenAPI via Utoipa.

use actix_web::{HttpResponse, http::header, web};

use crate::domain::health;
use crate::inbound::http::error::{ApiError, ErrorClassifier};

/// Path of the health probe.
pub const HEALTHCHECK_PATH: &str = "/healthcheck";

/// Checks API is healthy.
#[utoipa::path(
    get,
    path = "/healthcheck",
    responses(
        (status = 200, description = "Server is healthy"),
        (status = 500, description = "Server Error", body = ApiError)
    ),
    tags = ["endpoints"],
    operation_id = "healthcheck"
)]
pub async fn healthcheck(classifier: web::Data<dyn ErrorClassifier>) -> HttpResponse {
    match health::healthcheck() {
        Ok(()) => HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish(),
        Err(err) => classifier.classify(&err).into_response(),
    }
}
