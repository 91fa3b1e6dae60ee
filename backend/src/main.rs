//! Pet service entry-point: loads settings, assembles the router and serves
//! the REST endpoints with their OpenAPI document.

mod server;

use std::sync::Arc;

use backend::config::ServerSettings;
use backend::inbound::http::{StatusTable, build_router};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    let router = build_router(Arc::new(StatusTable)).map_err(std::io::Error::other)?;

    info!(addr = %config.bind_addr(), "starting server");
    create_server(router, config)?.await
}
