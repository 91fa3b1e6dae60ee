//! Server construction and listener wiring.

mod config;

pub use config::ServerConfig;

use actix_web::HttpServer;
use actix_web::dev::Server;
use backend::inbound::http::ApiRouter;

/// Construct an Actix HTTP server serving `router`.
///
/// Each worker builds its application from a clone of the already validated
/// router, so no worker can observe a partially assembled route table.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(router: ApiRouter, config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, workers } = config;

    let server = HttpServer::new(move || router.clone().into_app());
    let server = match workers {
        Some(count) => server.workers(count),
        None => server,
    };

    Ok(server.bind(bind_addr)?.run())
}
