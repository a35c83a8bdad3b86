//! Classifieds entry-point: loads settings, wires the in-memory stores into
//! the application service, and serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use classifieds::domain::ClassifiedsService;
use classifieds::inbound::http::health::HealthState;
use classifieds::inbound::http::state::HttpState;
use classifieds::outbound::persistence::{InMemoryAdRepository, InMemoryUserRepository};
use server::{ServerConfig, ServerSettings, create_server, drain_on};

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
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid listener host: {e}")))?;

    let service = Arc::new(ClassifiedsService::new(
        Arc::new(InMemoryAdRepository::default()),
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(DefaultClock),
    ));
    let http_state = HttpState::from_service(service);
    let health_state = web::Data::new(HealthState::new());

    let server = create_server(health_state.clone(), http_state, ServerConfig::new(bind_addr))?;
    actix_web::rt::spawn(drain_on(
        health_state,
        server.handle(),
        tokio::signal::ctrl_c(),
    ));
    info!(%bind_addr, "classifieds listening");
    server.await
}
