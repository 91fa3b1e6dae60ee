//! Router assembly.
//!
//! Routes are registered on a [`RouterBuilder`] together with the OpenAPI
//! operation they implement. [`RouterBuilder::build`] cross-checks the table
//! against the generated document and only then yields an [`ApiRouter`]
//! ready to serve. A failed check is a startup error, never a per-request
//! one, and a built router cannot be modified.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::Method;
use actix_web::{App, HttpRequest, HttpResponse, Route, web};
use tracing::{debug, info};
use utoipa::OpenApi as _;
use utoipa::openapi::path::Operation;
use utoipa::openapi::{OpenApi, PathItem};

use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::error::{ErrorClassifier, SharedClassifier, json_config, query_config};
use crate::inbound::http::health::{self, HEALTHCHECK_PATH};
use crate::inbound::http::pets::{self, PETS_PATH};
use crate::middleware::Trace;

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Produces the Actix route for a registration; invoked once per worker.
pub type RouteFactory = fn() -> Route;

/// One entry of the route table.
#[derive(Clone)]
pub struct RouteSpec {
    method: Method,
    path: &'static str,
    operation_id: &'static str,
    handler: RouteFactory,
}

impl RouteSpec {
    /// Bind `handler` to `method` and `path`, implementing the documented
    /// operation `operation_id`.
    pub fn new(
        method: Method,
        path: &'static str,
        operation_id: &'static str,
        handler: RouteFactory,
    ) -> Self {
        Self {
            method,
            path,
            operation_id,
            handler,
        }
    }

    /// Shorthand for a `GET` registration.
    pub fn get(path: &'static str, operation_id: &'static str, handler: RouteFactory) -> Self {
        Self::new(Method::GET, path, operation_id, handler)
    }

    /// Shorthand for a `PUT` registration.
    pub fn put(path: &'static str, operation_id: &'static str, handler: RouteFactory) -> Self {
        Self::new(Method::PUT, path, operation_id, handler)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Route path, in OpenAPI template syntax.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// OpenAPI operation identifier.
    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    fn label(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    fn route(&self) -> Route {
        (self.handler)().method(self.method.clone())
    }
}

impl std::fmt::Debug for RouteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSpec")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("operation_id", &self.operation_id)
            .finish_non_exhaustive()
    }
}

/// A single inconsistency found while assembling the router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The same method and path were registered twice.
    #[error("route {method} {path} is registered more than once")]
    DuplicateRoute {
        /// HTTP method.
        method: Method,
        /// Route path.
        path: String,
    },
    /// Two registrations claim the same operation id.
    #[error("operation id '{operation_id}' is registered for both {first} and {second}")]
    DuplicateOperationId {
        /// Conflicting identifier.
        operation_id: String,
        /// Route registered first.
        first: String,
        /// Route registered second.
        second: String,
    },
    /// The document itself reuses an operation id.
    #[error("operation id '{operation_id}' appears more than once in the OpenAPI document")]
    DuplicateDocumentedOperationId {
        /// Conflicting identifier.
        operation_id: String,
    },
    /// A registration has no documented operation.
    #[error("route {method} {path} is not documented")]
    Undocumented {
        /// HTTP method.
        method: Method,
        /// Route path.
        path: String,
    },
    /// A registration names a different operation than the document.
    #[error(
        "route {method} {path} is documented as '{documented}' but registered as '{registered}'"
    )]
    OperationIdMismatch {
        /// HTTP method.
        method: Method,
        /// Route path.
        path: String,
        /// Identifier in the document, empty when absent.
        documented: String,
        /// Identifier in the registration.
        registered: String,
    },
    /// A documented operation has no registered handler.
    #[error("documented operation {method} {path} has no registered handler")]
    Unserved {
        /// HTTP method.
        method: Method,
        /// Route path.
        path: String,
    },
}

/// Router assembly failed; carries every inconsistency found.
#[derive(Debug, thiserror::Error)]
#[error("router assembly failed: {}", describe(.errors))]
pub struct AssemblyError {
    errors: Vec<RegistrationError>,
}

impl AssemblyError {
    /// The individual registration problems, in discovery order.
    pub fn errors(&self) -> &[RegistrationError] {
        &self.errors
    }
}

fn describe(errors: &[RegistrationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn operations(item: &PathItem) -> impl Iterator<Item = (Method, &Operation)> {
    [
        (Method::GET, item.get.as_ref()),
        (Method::PUT, item.put.as_ref()),
        (Method::POST, item.post.as_ref()),
        (Method::DELETE, item.delete.as_ref()),
        (Method::OPTIONS, item.options.as_ref()),
        (Method::HEAD, item.head.as_ref()),
        (Method::PATCH, item.patch.as_ref()),
        (Method::TRACE, item.trace.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.map(|op| (method, op)))
}

fn documented_operation<'a>(
    document: &'a OpenApi,
    method: &Method,
    path: &str,
) -> Option<&'a Operation> {
    let item = document.paths.paths.get(path)?;
    operations(item).find_map(|(documented, op)| (documented == *method).then_some(op))
}

/// Cross-check a route table against an OpenAPI document.
///
/// Returns every problem found; an empty vector means the table and the
/// document describe the same operations.
pub fn validate(document: &OpenApi, routes: &[RouteSpec]) -> Vec<RegistrationError> {
    let mut errors = Vec::new();
    let mut registered = HashSet::new();
    let mut operation_ids: HashMap<&str, String> = HashMap::new();

    for spec in routes {
        if !registered.insert((spec.method.clone(), spec.path)) {
            errors.push(RegistrationError::DuplicateRoute {
                method: spec.method.clone(),
                path: spec.path.to_owned(),
            });
            continue;
        }

        match operation_ids.entry(spec.operation_id) {
            Entry::Occupied(first) => errors.push(RegistrationError::DuplicateOperationId {
                operation_id: spec.operation_id.to_owned(),
                first: first.get().clone(),
                second: spec.label(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(spec.label());
            }
        }

        match documented_operation(document, &spec.method, spec.path) {
            None => errors.push(RegistrationError::Undocumented {
                method: spec.method.clone(),
                path: spec.path.to_owned(),
            }),
            Some(op) if op.operation_id.as_deref() != Some(spec.operation_id) => {
                errors.push(RegistrationError::OperationIdMismatch {
                    method: spec.method.clone(),
                    path: spec.path.to_owned(),
                    documented: op.operation_id.clone().unwrap_or_default(),
                    registered: spec.operation_id.to_owned(),
                });
            }
            Some(_) => {}
        }
    }

    let mut documented_ids = HashSet::new();
    for (path, item) in &document.paths.paths {
        for (method, op) in operations(item) {
            if let Some(id) = op.operation_id.as_deref() {
                if !documented_ids.insert(id) {
                    errors.push(RegistrationError::DuplicateDocumentedOperationId {
                        operation_id: id.to_owned(),
                    });
                }
            }
            if !registered.contains(&(method.clone(), path.as_str())) {
                errors.push(RegistrationError::Unserved {
                    method,
                    path: path.clone(),
                });
            }
        }
    }

    errors
}

/// Route table under construction.
pub struct RouterBuilder {
    document: OpenApi,
    classifier: SharedClassifier,
    routes: Vec<RouteSpec>,
}

impl RouterBuilder {
    /// Start assembling against `document`, rendering failures with
    /// `classifier`.
    pub fn new(document: OpenApi, classifier: SharedClassifier) -> Self {
        Self {
            document,
            classifier,
            routes: Vec::new(),
        }
    }

    /// Register a route.
    #[must_use]
    pub fn route(mut self, spec: RouteSpec) -> Self {
        debug!(route = %spec.label(), operation_id = spec.operation_id, "registering route");
        self.routes.push(spec);
        self
    }

    /// Validate the table and freeze it.
    ///
    /// # Errors
    /// Returns [`AssemblyError`] when [`validate`] reports any problem.
    pub fn build(self) -> Result<ApiRouter, AssemblyError> {
        let errors = validate(&self.document, &self.routes);
        if !errors.is_empty() {
            return Err(AssemblyError { errors });
        }
        info!(routes = self.routes.len(), "router assembled");
        Ok(ApiRouter {
            routes: self.routes.into(),
            document: Arc::new(self.document),
            classifier: self.classifier,
        })
    }
}

/// Validated, immutable route table ready to serve.
///
/// Clone one per server worker; clones share the document and classifier.
#[derive(Clone)]
pub struct ApiRouter {
    routes: Arc<[RouteSpec]>,
    document: Arc<OpenApi>,
    classifier: SharedClassifier,
}

impl ApiRouter {
    /// Registered routes.
    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    /// The validated OpenAPI document.
    pub fn document(&self) -> &OpenApi {
        &self.document
    }

    /// Install routes, extractor configuration and shared data.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(Arc::clone(&self.classifier)))
            .app_data(web::Data::from(Arc::clone(&self.document)))
            .app_data(query_config(Arc::clone(&self.classifier)))
            .app_data(json_config(Arc::clone(&self.classifier)));

        let mut by_path: BTreeMap<&str, Vec<&RouteSpec>> = BTreeMap::new();
        for spec in self.routes.iter() {
            by_path.entry(spec.path).or_default().push(spec);
        }

        for (path, specs) in by_path {
            let allow = specs
                .iter()
                .map(|spec| spec.method.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let resource = specs
                .iter()
                .fold(web::resource(path), |resource, spec| resource.route(spec.route()));
            cfg.service(resource.default_service(method_not_allowed(allow)));
        }

        cfg.service(
            web::resource(OPENAPI_PATH)
                .route(web::get().to(openapi_json))
                .default_service(method_not_allowed(Method::GET.to_string())),
        );
    }

    /// Build the Actix application: tracing middleware, the route table and
    /// a JSON fallback for unknown paths.
    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Trace)
            .configure(|cfg| self.configure(cfg))
            .default_service(web::to(route_not_found))
    }
}

/// Assemble the service's route table with `classifier` as the error policy.
///
/// # Errors
/// Returns [`AssemblyError`] when the handlers and the generated document
/// disagree.
pub fn build_router(classifier: SharedClassifier) -> Result<ApiRouter, AssemblyError> {
    RouterBuilder::new(ApiDoc::openapi(), classifier)
        .route(RouteSpec::get(HEALTHCHECK_PATH, "healthcheck", || {
            web::route().to(health::healthcheck)
        }))
        .route(RouteSpec::get(PETS_PATH, "getPet", || {
            web::route().to(pets::get_pet)
        }))
        .route(RouteSpec::put(PETS_PATH, "updatePet", || {
            web::route().to(pets::update_pet)
        }))
        .build()
}

async fn openapi_json(document: web::Data<OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(document.get_ref())
}

fn method_not_allowed(allow: String) -> Route {
    web::to(
        move |req: HttpRequest, classifier: web::Data<dyn ErrorClassifier>| {
            let allow = allow.clone();
            async move {
                let error = Error::method_not_allowed(format!(
                    "method {} is not allowed on {}",
                    req.method(),
                    req.path()
                ));
                let mut response = classifier.classify(&error).into_response();
                if let Ok(value) = HeaderValue::from_str(&allow) {
                    response.headers_mut().insert(header::ALLOW, value);
                }
                response
            }
        },
    )
}

async fn route_not_found(
    req: HttpRequest,
    classifier: web::Data<dyn ErrorClassifier>,
) -> HttpResponse {
    classifier
        .classify(&Error::not_found(format!("route {}", req.path())))
        .into_response()
}
